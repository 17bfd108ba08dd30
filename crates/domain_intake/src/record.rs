//! The intake record and its per-step sections
//!
//! Each wizard step owns one section of the record. Sections start empty
//! and carry their own `validator` rules; the wizard validates only the
//! current step's section when advancing and the whole record at submit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::Money;

use crate::validation::{validate_phone, validate_zip};

/// Product line the applicant is requesting a quote for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoverageType {
    TermLife,
    WholeLife,
    MortgageProtection,
    FinalExpense,
}

/// Step 1: coverage selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CoverageStep {
    #[validate(required(message = "Please select a coverage type"))]
    pub coverage_type: Option<CoverageType>,
    #[validate(required(message = "Please select a coverage amount"))]
    pub coverage_amount: Option<Money>,
}

/// Step 2: contact information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactStep {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(custom(function = validate_phone))]
    pub phone: String,
}

/// Step 3: mailing address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddressStep {
    #[validate(length(min = 1, message = "Street address is required"))]
    pub street_address: String,
    /// Apartment/suite line; optional, never validated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,
    #[validate(custom(function = validate_zip))]
    pub zip_code: String,
}

/// Step 4: health background
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HealthStep {
    #[validate(required(message = "Height (feet) is required"))]
    pub height_feet: Option<u32>,
    #[validate(required(message = "Height (inches) is required"))]
    pub height_inches: Option<u32>,
    #[validate(required(message = "Weight is required"))]
    pub weight: Option<u32>,
    #[validate(required(message = "Birth date is required"))]
    pub birth_date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "Medical background is required"))]
    pub medical_background: String,
}

/// The full applicant record accumulated across the wizard
///
/// Held in memory for the duration of one session and POSTed as a single
/// JSON unit on final submission. Never persisted locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IntakeRecord {
    #[validate(nested)]
    pub coverage: CoverageStep,
    #[validate(nested)]
    pub contact: ContactStep,
    #[validate(nested)]
    pub address: AddressStep,
    #[validate(nested)]
    pub health: HealthStep,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_type_kebab_case_keys() {
        let json = serde_json::to_string(&CoverageType::MortgageProtection).unwrap();
        assert_eq!(json, "\"mortgage-protection\"");
    }

    #[test]
    fn test_empty_record_fails_full_validation() {
        let record = IntakeRecord::default();
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_address_line2_optional() {
        let step = AddressStep {
            street_address: "12 Main St".to_string(),
            address_line2: None,
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62704".to_string(),
        };
        assert!(step.validate().is_ok());
    }
}
