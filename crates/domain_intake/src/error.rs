//! Intake domain errors

use thiserror::Error;

use crate::submit::SubmitError;
use crate::validation::FieldError;

/// Errors raised by the intake wizard
///
/// Every variant is recoverable at the form: validation errors are fixed
/// by the user, submission errors by clicking submit again. Nothing here
/// clears entered data.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// One or more fields in the validated scope failed their checks
    #[error("{} field(s) failed validation", .0.len())]
    Validation(Vec<FieldError>),

    /// Submit was invoked before the wizard reached the final step
    #[error("cannot submit from step {0}")]
    NotOnFinalStep(String),

    /// A submission is already outstanding; the control stays disabled
    #[error("a submission is already in flight")]
    SubmissionInFlight,

    /// The session already submitted; the form is not re-enterable
    #[error("quote request already submitted")]
    AlreadySubmitted,

    /// The outbound POST failed; the record is untouched and resubmittable
    #[error(transparent)]
    Submission(#[from] SubmitError),
}

impl IntakeError {
    /// Returns the field errors if this is a validation failure
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            IntakeError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
