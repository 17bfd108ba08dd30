//! The multi-step quote wizard state machine
//!
//! Four ordered data-entry steps followed by a terminal `Submitted` state.
//! Advancing validates only the current step; going back never clears
//! anything. The wizard owns the intake record exclusively for the
//! session - nothing else reads or mutates it.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use validator::Validate;

use crate::error::IntakeError;
use crate::record::IntakeRecord;
use crate::submit::QuoteSubmitter;
use crate::validation::field_errors;

/// Wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
    CoverageSelection,
    ContactInfo,
    Address,
    HealthInfo,
    /// Terminal: the form is not re-enterable without a fresh session
    Submitted,
}

impl WizardStep {
    /// Returns the step after this one, if any
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::CoverageSelection => Some(WizardStep::ContactInfo),
            WizardStep::ContactInfo => Some(WizardStep::Address),
            WizardStep::Address => Some(WizardStep::HealthInfo),
            WizardStep::HealthInfo | WizardStep::Submitted => None,
        }
    }

    /// Returns the step before this one, if any
    ///
    /// `Submitted` has no predecessor: a completed session cannot back
    /// into data entry.
    pub fn prev(&self) -> Option<WizardStep> {
        match self {
            WizardStep::CoverageSelection | WizardStep::Submitted => None,
            WizardStep::ContactInfo => Some(WizardStep::CoverageSelection),
            WizardStep::Address => Some(WizardStep::ContactInfo),
            WizardStep::HealthInfo => Some(WizardStep::Address),
        }
    }

    /// Display name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            WizardStep::CoverageSelection => "coverage selection",
            WizardStep::ContactInfo => "contact info",
            WizardStep::Address => "address",
            WizardStep::HealthInfo => "health info",
            WizardStep::Submitted => "submitted",
        }
    }
}

/// The quote intake wizard
///
/// # State Machine
///
/// ```text
/// CoverageSelection -> ContactInfo -> Address -> HealthInfo -> Submitted
///        ^________________back_________________/
/// ```
///
/// - `advance` moves forward only when the current step's fields pass
///   validation; failures surface field-level messages and keep the step
/// - `back` preserves all entered data
/// - `submit` is available only on the final step, validates the whole
///   record, and performs exactly one outbound request; failure keeps the
///   wizard on the final step with the record intact
#[derive(Debug)]
pub struct QuoteWizard {
    step: WizardStep,
    record: IntakeRecord,
    last_error: Option<String>,
    in_flight: bool,
}

impl Default for QuoteWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteWizard {
    /// Creates a wizard at the first step with an empty record
    pub fn new() -> Self {
        Self {
            step: WizardStep::CoverageSelection,
            record: IntakeRecord::default(),
            last_error: None,
            in_flight: false,
        }
    }

    /// Returns the current step
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Returns the accumulated record
    pub fn record(&self) -> &IntakeRecord {
        &self.record
    }

    /// Returns the record for field entry
    pub fn record_mut(&mut self) -> &mut IntakeRecord {
        &mut self.record
    }

    /// Returns the banner message from the last failed submission, if any
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Returns true once the session has submitted successfully
    pub fn is_submitted(&self) -> bool {
        self.step == WizardStep::Submitted
    }

    /// Returns true while a submission is outstanding; the submit control
    /// is disabled for the duration
    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Validates the current step and moves to the next one
    ///
    /// # Errors
    ///
    /// [`IntakeError::Validation`] with per-field messages if the current
    /// step's required fields are empty or malformed; the step does not
    /// change and no data is lost. [`IntakeError::AlreadySubmitted`] from
    /// the terminal state.
    pub fn advance(&mut self) -> Result<WizardStep, IntakeError> {
        let validation = match self.step {
            WizardStep::CoverageSelection => self.record.coverage.validate(),
            WizardStep::ContactInfo => self.record.contact.validate(),
            WizardStep::Address => self.record.address.validate(),
            WizardStep::HealthInfo => self.record.health.validate(),
            WizardStep::Submitted => return Err(IntakeError::AlreadySubmitted),
        };

        if let Err(errors) = validation {
            let errors = field_errors(&errors);
            debug!(step = self.step.name(), count = errors.len(), "step validation failed");
            return Err(IntakeError::Validation(errors));
        }

        if let Some(next) = self.step.next() {
            debug!(from = self.step.name(), to = next.name(), "wizard advanced");
            self.step = next;
        }
        Ok(self.step)
    }

    /// Moves to the previous step, keeping all entered data
    ///
    /// No-op on the first step and from the terminal state.
    pub fn back(&mut self) -> WizardStep {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }

    /// Submits the assembled record through the given submitter
    ///
    /// Validates the entire record first, then performs a single outbound
    /// request. On success the wizard transitions to `Submitted`. On
    /// failure the wizard stays on the final step, records a user-visible
    /// error, and leaves the record untouched so an identical
    /// resubmission needs no re-entry.
    ///
    /// # Errors
    ///
    /// - [`IntakeError::NotOnFinalStep`] unless the wizard is on health info
    /// - [`IntakeError::AlreadySubmitted`] from the terminal state
    /// - [`IntakeError::SubmissionInFlight`] while a request is outstanding
    /// - [`IntakeError::Validation`] if any step's fields are incomplete
    /// - [`IntakeError::Submission`] when the endpoint rejects or is
    ///   unreachable
    pub async fn submit(&mut self, submitter: &dyn QuoteSubmitter) -> Result<(), IntakeError> {
        match self.step {
            WizardStep::Submitted => return Err(IntakeError::AlreadySubmitted),
            WizardStep::HealthInfo => {}
            other => return Err(IntakeError::NotOnFinalStep(other.name().to_string())),
        }
        if self.in_flight {
            return Err(IntakeError::SubmissionInFlight);
        }

        if let Err(errors) = self.record.validate() {
            return Err(IntakeError::Validation(field_errors(&errors)));
        }

        self.in_flight = true;
        let result = submitter.submit(&self.record).await;
        self.in_flight = false;

        match result {
            Ok(()) => {
                info!("quote request submitted");
                self.last_error = None;
                self.step = WizardStep::Submitted;
                Ok(())
            }
            Err(err) => {
                self.last_error =
                    Some("We couldn't submit your request. Please try again.".to_string());
                Err(err.into())
            }
        }
    }
}
