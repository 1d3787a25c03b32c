//! Trait abstraction for submission delivery to enable mocking in tests

use crate::submission::FormSubmission;
use async_trait::async_trait;
use thiserror::Error;

/// Why a submission could not be delivered
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request to the email API failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Email API rejected the message (status {status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("API key contains characters not allowed in a header")]
    InvalidApiKey,
    #[error("Simulated delivery failure")]
    Simulated,
}

/// Delivers a contact request somewhere a human will read it
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Short name used in log lines
    fn name(&self) -> &'static str;

    /// Deliver one submission; `Ok` means it was accepted
    async fn deliver(&self, submission: &FormSubmission) -> Result<(), TransportError>;
}
