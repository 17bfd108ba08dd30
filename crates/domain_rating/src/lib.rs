//! Term-Life Rating Domain
//!
//! This crate implements the quote generation and comparison engine for the
//! term-life product line:
//!
//! - **Rate Calculator**: a pure function mapping applicant attributes and
//!   policy parameters to a monthly/annual premium
//! - **Quote Option Generator**: produces the fixed matrix of term-length
//!   options from the calculator for one coverage amount
//! - **Comparison Board**: owns the generated options plus the sticky
//!   selection the comparison grid renders
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_rating::{calculate_rate, ComparisonBoard, Gender, HealthRating, RateInput};
//!
//! let input = RateInput::new(500_000, 20, 35, Gender::Male, false, HealthRating::Good);
//! let rate = calculate_rate(&input);
//!
//! let mut board = ComparisonBoard::new();
//! board.regenerate(&input);
//! assert_eq!(board.selected_id(), Some("term-20"));
//! ```

pub mod error;
pub mod options;
pub mod rate;

pub use error::RatingError;
pub use options::{generate_options, ComparisonBoard, QuoteOption, TERM_YEAR_OPTIONS};
pub use rate::{
    calculate_rate, Gender, HealthRating, RateInput, RateOutput, COVERAGE_MAX, COVERAGE_MIN,
    COVERAGE_QUICK_SELECT, COVERAGE_STEP,
};
