//! Lead-capture DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{ContactRequestId, QuoteRequestId, SubscriptionId};
use domain_intake::validation::validate_phone;

/// Response for an accepted quote request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequestResponse {
    pub id: QuoteRequestId,
    pub received_at: DateTime<Utc>,
}

/// Contact-form request body
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequestBody {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(custom(function = validate_phone))]
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// Response for an accepted contact request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequestResponse {
    pub id: ContactRequestId,
    pub received_at: DateTime<Utc>,
}

/// Newsletter signup body
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionBody {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
}

/// Response for an accepted subscription
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionResponse {
    pub id: SubscriptionId,
    pub email: String,
}
