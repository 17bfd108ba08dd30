//! Field-level validation helpers
//!
//! Custom validators the step sections use, plus the flattening of
//! `validator`'s nested error structure into the per-field messages the
//! form surfaces next to each input.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// A user-visible validation failure on one form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name, e.g. `email` or `zip_code`
    pub field: String,
    /// Message displayed next to the field
    pub message: String,
}

/// Validates a phone number: at least 10 digits, any formatting allowed
///
/// "(555) 123-4567" and "5551234567" both pass; formatting characters are
/// ignored rather than rejected.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if digits >= 10 {
        Ok(())
    } else {
        Err(ValidationError::new("phone")
            .with_message(Cow::Borrowed("Please enter a valid phone number")))
    }
}

/// Validates a US zip code: 5 digits, optionally ZIP+4 (`62704-1234`)
pub fn validate_zip(zip: &str) -> Result<(), ValidationError> {
    let valid = match zip.split_once('-') {
        None => is_digits(zip, 5),
        Some((base, plus4)) => is_digits(base, 5) && is_digits(plus4, 4),
    };
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("zip_code")
            .with_message(Cow::Borrowed("Please enter a valid zip code")))
    }
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.chars().all(|c| c.is_ascii_digit())
}

/// Flattens `validator` errors into displayable per-field messages
///
/// Nested struct errors are walked recursively; the innermost field name
/// wins, matching how the form labels its inputs.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut flat = Vec::new();
    collect(errors, &mut flat);
    flat
}

fn collect(errors: &ValidationErrors, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    out.push(FieldError {
                        field: field.to_string(),
                        message: error
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("Invalid value for {field}")),
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, out),
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    collect(nested, out);
                }
            }
        }
    }
}
