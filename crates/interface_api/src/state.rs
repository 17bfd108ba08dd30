//! Application state and the in-memory lead ledger

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

use core_kernel::{ContactRequestId, QuoteRequestId, SubscriptionId};
use domain_intake::{HttpQuoteSubmitter, IntakeRecord};

use crate::config::ApiConfig;

/// A received quote request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredQuoteRequest {
    pub id: QuoteRequestId,
    pub received_at: DateTime<Utc>,
    #[serde(flatten)]
    pub record: IntakeRecord,
}

/// A received contact request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredContactRequest {
    pub id: ContactRequestId,
    pub received_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// A newsletter subscription
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSubscription {
    pub id: SubscriptionId,
    pub received_at: DateTime<Utc>,
    pub email: String,
}

/// In-memory ledger of received leads
///
/// The service owns no persisted state; downstream CRM sync reads from
/// here during the process lifetime.
#[derive(Debug, Default)]
pub struct LeadLedger {
    pub quote_requests: RwLock<Vec<StoredQuoteRequest>>,
    pub contact_requests: RwLock<Vec<StoredContactRequest>>,
    pub subscriptions: RwLock<Vec<StoredSubscription>>,
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub leads: Arc<LeadLedger>,
    /// Outbound adapter for the configured forward endpoint, if any
    pub forwarder: Option<HttpQuoteSubmitter>,
    pub config: ApiConfig,
}

impl AppState {
    /// Creates fresh state with an empty ledger
    pub fn new(config: ApiConfig) -> Self {
        let forwarder = config
            .quote_forward_endpoint
            .as_deref()
            .map(HttpQuoteSubmitter::new);
        Self {
            leads: Arc::new(LeadLedger::default()),
            forwarder,
            config,
        }
    }
}
