//! Quote Intake Domain
//!
//! This crate implements the multi-step quote intake workflow: an ordered
//! wizard that accumulates one applicant's [`IntakeRecord`] across four
//! steps, validates each step locally, and submits the assembled record as
//! a single unit at the end.
//!
//! # Wizard Lifecycle
//!
//! ```text
//! CoverageSelection -> ContactInfo -> Address -> HealthInfo -> Submitted
//! ```
//!
//! The record lives in memory only. Abandoning the wizard discards it;
//! there is no draft-save mechanism. A failed submission keeps the wizard
//! on the final step with all data intact for an explicit resubmission.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_intake::{HttpQuoteSubmitter, QuoteWizard, WizardStep};
//!
//! let mut wizard = QuoteWizard::new();
//! wizard.record_mut().contact.email = "pat@example.com".to_string();
//! // ... fill the remaining fields ...
//! wizard.advance()?;
//!
//! let submitter = HttpQuoteSubmitter::new("https://api.example.com/api/v1/quote-requests");
//! wizard.submit(&submitter).await?;
//! assert_eq!(wizard.step(), WizardStep::Submitted);
//! ```

pub mod error;
pub mod record;
pub mod submit;
pub mod validation;
pub mod workflow;

pub use error::IntakeError;
pub use record::{AddressStep, ContactStep, CoverageStep, CoverageType, HealthStep, IntakeRecord};
pub use submit::{HttpQuoteSubmitter, QuoteSubmitter, SubmitError};
pub use validation::FieldError;
pub use workflow::{QuoteWizard, WizardStep};
