//! Lead-capture handlers
//!
//! The quote-requests endpoint is the one the intake wizard POSTs to on
//! final submission. Contact requests and newsletter subscriptions back
//! the other lead forms on the marketing sites.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use tracing::{info, warn};
use validator::Validate;

use core_kernel::{ContactRequestId, QuoteRequestId, SubscriptionId};
use domain_intake::{IntakeRecord, QuoteSubmitter};

use crate::dto::intake::{
    ContactRequestBody, ContactRequestResponse, QuoteRequestResponse, SubscriptionBody,
    SubscriptionResponse,
};
use crate::error::ApiError;
use crate::state::{AppState, StoredContactRequest, StoredQuoteRequest, StoredSubscription};

/// Accepts a completed intake record from the quote wizard
///
/// When a forward endpoint is configured, the accepted record is relayed
/// downstream after it is ledgered; a failed relay does not fail the
/// request, since the lead is already captured.
pub async fn create_quote_request(
    State(state): State<AppState>,
    Json(record): Json<IntakeRecord>,
) -> Result<(StatusCode, Json<QuoteRequestResponse>), ApiError> {
    record.validate()?;

    let stored = StoredQuoteRequest {
        id: QuoteRequestId::new_v7(),
        received_at: Utc::now(),
        record,
    };
    let response = QuoteRequestResponse {
        id: stored.id,
        received_at: stored.received_at,
    };

    info!(id = %stored.id, coverage_type = ?stored.record.coverage.coverage_type, "quote request received");

    if let Some(forwarder) = &state.forwarder {
        if let Err(err) = forwarder.submit(&stored.record).await {
            warn!(id = %stored.id, %err, "downstream quote forward failed");
        }
    }

    state.leads.quote_requests.write().await.push(stored);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Lists received quote requests (ops/debug surface)
pub async fn list_quote_requests(
    State(state): State<AppState>,
) -> Json<Vec<StoredQuoteRequest>> {
    Json(state.leads.quote_requests.read().await.clone())
}

/// Accepts a contact-form lead
pub async fn create_contact_request(
    State(state): State<AppState>,
    Json(body): Json<ContactRequestBody>,
) -> Result<(StatusCode, Json<ContactRequestResponse>), ApiError> {
    body.validate()?;

    let stored = StoredContactRequest {
        id: ContactRequestId::new_v7(),
        received_at: Utc::now(),
        name: body.name,
        email: body.email,
        phone: body.phone,
        message: body.message,
    };
    let response = ContactRequestResponse {
        id: stored.id,
        received_at: stored.received_at,
    };

    info!(id = %stored.id, "contact request received");
    state.leads.contact_requests.write().await.push(stored);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Accepts a newsletter signup; duplicate emails conflict
pub async fn create_subscription(
    State(state): State<AppState>,
    Json(body): Json<SubscriptionBody>,
) -> Result<(StatusCode, Json<SubscriptionResponse>), ApiError> {
    body.validate()?;

    let email = body.email.trim().to_lowercase();
    let mut subscriptions = state.leads.subscriptions.write().await;
    if subscriptions.iter().any(|s| s.email == email) {
        return Err(ApiError::Conflict(format!("{email} is already subscribed")));
    }

    let stored = StoredSubscription {
        id: SubscriptionId::new_v7(),
        received_at: Utc::now(),
        email: email.clone(),
    };
    let response = SubscriptionResponse {
        id: stored.id,
        email,
    };
    subscriptions.push(stored);

    Ok((StatusCode::CREATED, Json(response)))
}
