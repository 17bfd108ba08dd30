//! Outbound quote-request submission
//!
//! The wizard submits through the [`QuoteSubmitter`] port so tests can
//! inject a recording double; production wires in [`HttpQuoteSubmitter`],
//! which POSTs the record as JSON to the quote-requests endpoint.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::record::IntakeRecord;

/// Errors from a submission attempt
///
/// Both variants leave the intake record untouched; the only remedy is a
/// user-initiated resubmission. There is no automatic retry.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The endpoint answered with a non-2xx status
    #[error("quote service rejected the request with status {0}")]
    Rejected(u16),

    /// The request never completed (DNS, connect, timeout, ...)
    #[error("could not reach the quote service: {0}")]
    Transport(String),
}

/// Port for delivering a completed intake record
#[async_trait]
pub trait QuoteSubmitter: Send + Sync {
    /// Delivers the record; `Ok` means the endpoint accepted it (2xx)
    async fn submit(&self, record: &IntakeRecord) -> Result<(), SubmitError>;
}

/// Submits quote requests over HTTP
///
/// Success is any 2xx status; the response body is not inspected. No
/// timeout is configured beyond the client default.
#[derive(Debug, Clone)]
pub struct HttpQuoteSubmitter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpQuoteSubmitter {
    /// Creates a submitter targeting the given quote-requests endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Creates a submitter with a shared client
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl QuoteSubmitter for HttpQuoteSubmitter {
    async fn submit(&self, record: &IntakeRecord) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(record)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            info!(endpoint = %self.endpoint, %status, "quote request accepted");
            Ok(())
        } else {
            warn!(endpoint = %self.endpoint, %status, "quote request rejected");
            Err(SubmitError::Rejected(status.as_u16()))
        }
    }
}
