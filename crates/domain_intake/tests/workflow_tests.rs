//! Quote Wizard Workflow Tests
//!
//! Covers the intake state machine end to end:
//! - Step gating: invalid steps never advance, valid steps always do
//! - Back-navigation preserves entered data
//! - Submission success, failure, and idempotent resubmission
//! - Terminal-state behavior after a successful submit

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use core_kernel::Money;
use domain_intake::{
    CoverageType, IntakeError, IntakeRecord, QuoteSubmitter, QuoteWizard, SubmitError, WizardStep,
};

/// Test double that records every payload and fails on demand
#[derive(Default)]
struct StubSubmitter {
    reject_with: Option<u16>,
    transport_failure: AtomicBool,
    calls: Mutex<Vec<IntakeRecord>>,
}

impl StubSubmitter {
    fn accepting() -> Self {
        Self::default()
    }

    fn rejecting(status: u16) -> Self {
        Self {
            reject_with: Some(status),
            ..Self::default()
        }
    }

    fn unreachable() -> Self {
        let stub = Self::default();
        stub.transport_failure.store(true, Ordering::SeqCst);
        stub
    }

    fn calls(&self) -> Vec<IntakeRecord> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuoteSubmitter for StubSubmitter {
    async fn submit(&self, record: &IntakeRecord) -> Result<(), SubmitError> {
        self.calls.lock().unwrap().push(record.clone());
        if self.transport_failure.load(Ordering::SeqCst) {
            return Err(SubmitError::Transport("connection refused".to_string()));
        }
        if let Some(status) = self.reject_with {
            return Err(SubmitError::Rejected(status));
        }
        Ok(())
    }
}

/// Fills all four steps with valid data and walks the wizard to the
/// final step.
fn wizard_at_final_step() -> QuoteWizard {
    let mut wizard = QuoteWizard::new();

    let record = wizard.record_mut();
    record.coverage.coverage_type = Some(CoverageType::MortgageProtection);
    record.coverage.coverage_amount = Some(Money::from_dollars(250_000));
    record.contact.first_name = "Pat".to_string();
    record.contact.last_name = "Winslow".to_string();
    record.contact.email = "pat.winslow@example.com".to_string();
    record.contact.phone = "(555) 123-4567".to_string();
    record.address.street_address = "12 Main St".to_string();
    record.address.city = "Springfield".to_string();
    record.address.state = "IL".to_string();
    record.address.zip_code = "62704".to_string();
    record.health.height_feet = Some(5);
    record.health.height_inches = Some(10);
    record.health.weight = Some(175);
    record.health.birth_date = NaiveDate::from_ymd_opt(1988, 4, 12);
    record.health.medical_background = "No known conditions".to_string();

    wizard.advance().unwrap();
    wizard.advance().unwrap();
    wizard.advance().unwrap();
    assert_eq!(wizard.step(), WizardStep::HealthInfo);
    wizard
}

// ============================================================================
// STEP GATING
// ============================================================================

#[test]
fn test_empty_step_does_not_advance() {
    let mut wizard = QuoteWizard::new();

    let err = wizard.advance().unwrap_err();
    assert!(matches!(err, IntakeError::Validation(_)));
    assert_eq!(wizard.step(), WizardStep::CoverageSelection);
}

#[test]
fn test_valid_step_advances() {
    let mut wizard = QuoteWizard::new();
    wizard.record_mut().coverage.coverage_type = Some(CoverageType::TermLife);
    wizard.record_mut().coverage.coverage_amount = Some(Money::from_dollars(500_000));

    assert_eq!(wizard.advance().unwrap(), WizardStep::ContactInfo);
}

#[test]
fn test_malformed_email_blocks_contact_step() {
    let mut wizard = QuoteWizard::new();
    wizard.record_mut().coverage.coverage_type = Some(CoverageType::TermLife);
    wizard.record_mut().coverage.coverage_amount = Some(Money::from_dollars(500_000));
    wizard.advance().unwrap();

    let record = wizard.record_mut();
    record.contact.first_name = "Pat".to_string();
    record.contact.last_name = "Winslow".to_string();
    record.contact.email = "not-an-email".to_string();
    record.contact.phone = "5551234567".to_string();

    let err = wizard.advance().unwrap_err();
    let fields = err.field_errors().unwrap();
    assert!(fields.iter().any(|f| f.field == "email"));
    assert_eq!(wizard.step(), WizardStep::ContactInfo);
}

#[test]
fn test_validation_failure_is_local_to_current_step() {
    // Later steps being empty must not block an earlier valid step.
    let mut wizard = QuoteWizard::new();
    wizard.record_mut().coverage.coverage_type = Some(CoverageType::FinalExpense);
    wizard.record_mut().coverage.coverage_amount = Some(Money::from_dollars(100_000));

    assert!(wizard.advance().is_ok());
}

// ============================================================================
// BACK NAVIGATION
// ============================================================================

#[test]
fn test_back_preserves_entered_data() {
    let mut wizard = wizard_at_final_step();
    let snapshot = wizard.record().clone();

    assert_eq!(wizard.back(), WizardStep::Address);
    assert_eq!(wizard.back(), WizardStep::ContactInfo);
    assert_eq!(wizard.record(), &snapshot, "no field cleared on back");

    // Forward again without re-entry.
    assert_eq!(wizard.advance().unwrap(), WizardStep::Address);
}

#[test]
fn test_back_stops_at_first_step() {
    let mut wizard = QuoteWizard::new();
    assert_eq!(wizard.back(), WizardStep::CoverageSelection);
}

// ============================================================================
// SUBMISSION
// ============================================================================

#[tokio::test]
async fn test_submit_before_final_step_rejected() {
    let mut wizard = QuoteWizard::new();
    let submitter = StubSubmitter::accepting();

    let err = wizard.submit(&submitter).await.unwrap_err();
    assert!(matches!(err, IntakeError::NotOnFinalStep(_)));
    assert!(submitter.calls().is_empty(), "no request issued");
}

#[tokio::test]
async fn test_successful_submit_is_terminal() {
    let mut wizard = wizard_at_final_step();
    let submitter = StubSubmitter::accepting();

    wizard.submit(&submitter).await.unwrap();
    assert!(wizard.is_submitted());
    assert_eq!(wizard.last_error(), None);

    // Exactly one POST was issued, carrying every entered field.
    let calls = submitter.calls();
    assert_eq!(calls.len(), 1);
    let body = serde_json::to_value(&calls[0]).unwrap();
    assert_eq!(body["coverage"]["coverageType"], "mortgage-protection");
    assert_eq!(body["contact"]["email"], "pat.winslow@example.com");
    assert_eq!(body["address"]["zipCode"], "62704");
    assert_eq!(body["health"]["weight"], 175);

    // The session cannot submit again.
    let err = wizard.submit(&submitter).await.unwrap_err();
    assert!(matches!(err, IntakeError::AlreadySubmitted));
    assert_eq!(submitter.calls().len(), 1);
}

#[tokio::test]
async fn test_failed_submit_keeps_record_for_resubmission() {
    let mut wizard = wizard_at_final_step();
    let snapshot = wizard.record().clone();

    let rejecting = StubSubmitter::rejecting(500);
    let err = wizard.submit(&rejecting).await.unwrap_err();
    assert!(matches!(
        err,
        IntakeError::Submission(SubmitError::Rejected(500))
    ));

    // Still on the final step, data untouched, banner visible.
    assert_eq!(wizard.step(), WizardStep::HealthInfo);
    assert_eq!(wizard.record(), &snapshot);
    assert!(wizard.last_error().is_some());
    assert!(!wizard.is_submitting(), "control re-enabled after failure");

    // Resubmission sends an identical payload and succeeds.
    let accepting = StubSubmitter::accepting();
    wizard.submit(&accepting).await.unwrap();
    assert_eq!(accepting.calls()[0], snapshot);
    assert!(wizard.is_submitted());
    assert_eq!(wizard.last_error(), None, "banner cleared on success");
}

#[tokio::test]
async fn test_transport_failure_surfaces_banner() {
    let mut wizard = wizard_at_final_step();
    let submitter = StubSubmitter::unreachable();

    let err = wizard.submit(&submitter).await.unwrap_err();
    assert!(matches!(
        err,
        IntakeError::Submission(SubmitError::Transport(_))
    ));
    assert_eq!(wizard.step(), WizardStep::HealthInfo);
    assert!(wizard.last_error().is_some());
}

#[tokio::test]
async fn test_submit_validates_whole_record() {
    let mut wizard = wizard_at_final_step();
    // Corrupt an earlier step after passing it.
    wizard.record_mut().contact.email = String::new();

    let submitter = StubSubmitter::accepting();
    let err = wizard.submit(&submitter).await.unwrap_err();
    assert!(matches!(err, IntakeError::Validation(_)));
    assert!(submitter.calls().is_empty());
}
