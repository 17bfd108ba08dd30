//! Premium rate calculation
//!
//! The rate calculator is a pure function over a fully-populated
//! [`RateInput`]: no side effects, no I/O, no randomness. Pricing is a
//! fixed multiplicative model over hardcoded factors; the comparison grid
//! recomputes it synchronously on every input change.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::Money;

/// Base annual rate in dollars per $1,000 of coverage
const BASE_ANNUAL_RATE_PER_THOUSAND: Decimal = dec!(0.14);

/// Lower bound of the coverage slider, in dollars
pub const COVERAGE_MIN: i64 = 100_000;

/// Upper bound of the coverage slider, in dollars
pub const COVERAGE_MAX: i64 = 2_000_000;

/// Coverage slider step, in dollars
pub const COVERAGE_STEP: i64 = 50_000;

/// Quick-select coverage amounts offered alongside the slider
pub const COVERAGE_QUICK_SELECT: [i64; 6] =
    [250_000, 500_000, 750_000, 1_000_000, 1_500_000, 2_000_000];

/// Applicant gender for pricing purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Returns the pricing multiplier for this gender
    pub fn factor(&self) -> Decimal {
        match self {
            Gender::Male => dec!(1),
            Gender::Female => dec!(0.91),
        }
    }
}

/// Coarse applicant risk classification used as a pricing multiplier
///
/// Values the upstream forms send that we do not recognize deserialize to
/// [`HealthRating::Unrated`], which prices at the neutral factor 1.0. The
/// calculator is deliberately permissive here: bad input is priced, not
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthRating {
    Excellent,
    Good,
    Average,
    Poor,
    /// Fallback for unrecognized ratings; neutral pricing
    #[serde(other)]
    Unrated,
}

impl HealthRating {
    /// Returns the pricing multiplier for this rating
    pub fn factor(&self) -> Decimal {
        match self {
            HealthRating::Excellent => dec!(0.8),
            HealthRating::Good => dec!(1),
            HealthRating::Average => dec!(1.3),
            HealthRating::Poor => dec!(1.7),
            HealthRating::Unrated => dec!(1),
        }
    }
}

/// Returns the pricing multiplier for a term length
///
/// Term lengths outside the offered set {10, 15, 20, 25, 30} price at the
/// neutral factor 1.0 rather than erroring, mirroring the health-rating
/// fallback.
pub fn term_factor(term_years: u32) -> Decimal {
    match term_years {
        10 => dec!(0.65),
        15 => dec!(0.8),
        20 => dec!(1),
        25 => dec!(1.2),
        30 => dec!(1.4),
        _ => dec!(1),
    }
}

/// Returns the age multiplier: 1 + (age - 25) * 0.026
///
/// Ages below 25 produce a factor below 1 (cheaper); there is no floor.
pub fn age_factor(age: u32) -> Decimal {
    dec!(1) + (Decimal::from(age) - dec!(25)) * dec!(0.026)
}

/// Applicant attributes and policy parameters for one rate calculation
///
/// Ephemeral: the grid rebuilds one of these on every control change.
/// Coverage is not validated here; the slider constrains it to
/// [[`COVERAGE_MIN`], [`COVERAGE_MAX`]] in [`COVERAGE_STEP`] increments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateInput {
    /// Coverage amount (face value) in dollars
    pub coverage: Money,
    /// Term length in years
    pub term_years: u32,
    /// Applicant age in years
    pub age: u32,
    /// Applicant gender
    pub gender: Gender,
    /// Current smoker
    pub smoker: bool,
    /// Health classification
    pub health_rating: HealthRating,
}

impl RateInput {
    /// Creates a rate input from whole-dollar coverage
    pub fn new(
        coverage_dollars: i64,
        term_years: u32,
        age: u32,
        gender: Gender,
        smoker: bool,
        health_rating: HealthRating,
    ) -> Self {
        Self {
            coverage: Money::from_dollars(coverage_dollars),
            term_years,
            age,
            gender,
            smoker,
            health_rating,
        }
    }

    /// Returns a copy of this input with a different term length
    pub fn with_term_years(&self, term_years: u32) -> Self {
        Self {
            term_years,
            ..self.clone()
        }
    }
}

/// Calculated premium, rounded to whole cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateOutput {
    /// Monthly premium
    pub monthly: Money,
    /// Annual premium
    pub annual: Money,
}

/// Calculates the premium for a rate input
///
/// The annual premium is computed first from the multiplicative model,
/// then divided by 12 for the monthly premium; both are independently
/// rounded half-up to cents. Deterministic for a fixed input.
///
/// ```text
/// annual = coverage/1000 * base * age * gender * smoker * health * term
/// ```
pub fn calculate_rate(input: &RateInput) -> RateOutput {
    let per_thousand = input.coverage.amount() / dec!(1000);
    let smoker_factor = if input.smoker { dec!(2.3) } else { dec!(1) };

    let annual_raw = per_thousand
        * BASE_ANNUAL_RATE_PER_THOUSAND
        * age_factor(input.age)
        * input.gender.factor()
        * smoker_factor
        * input.health_rating.factor()
        * term_factor(input.term_years);

    RateOutput {
        monthly: Money::from_raw(annual_raw / dec!(12)),
        annual: Money::from_raw(annual_raw),
    }
}
