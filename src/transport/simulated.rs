//! Offline transport that only logs what would have been sent

use super::traits::{Transport, TransportError};
use crate::submission::FormSubmission;
use async_trait::async_trait;
use std::time::Duration;

/// Default pretend network delay
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Waits a moment, logs the submission and reports success (or a failure, if asked to)
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
    fail: bool,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// Make every delivery fail, for trying out the error path
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl Transport for SimulatedTransport {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn deliver(&self, submission: &FormSubmission) -> Result<(), TransportError> {
        tokio::time::sleep(self.delay).await;

        tracing::info!(
            name = %submission.name(),
            email = %submission.email(),
            project_type = %submission.project_type(),
            site_visit = submission.site_visit(),
            timestamp = %submission.timestamp_iso(),
            "Form submitted (simulated)"
        );

        if self.fail {
            return Err(TransportError::Simulated);
        }
        Ok(())
    }
}
