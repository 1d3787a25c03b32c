//! Delivery of contact requests

mod email_api;
pub mod simulated;
mod traits;

pub use email_api::{EmailApiSettings, EmailApiTransport, DEFAULT_ENDPOINT};
pub use simulated::SimulatedTransport;
pub use traits::{Transport, TransportError};

#[cfg(test)]
pub use traits::MockTransport;

use crate::config::ContactConfig;
use std::sync::Arc;

/// Pick the transport for this run: the email API when a key is configured,
/// otherwise the simulated one
pub fn from_config(config: &ContactConfig) -> Result<Arc<dyn Transport>, TransportError> {
    match config.email_api() {
        Some(settings) => {
            tracing::info!(endpoint = %settings.endpoint, "Using email API transport");
            Ok(Arc::new(EmailApiTransport::new(settings)?))
        }
        None => {
            tracing::warn!("No API key configured, submissions are only simulated");
            let transport = SimulatedTransport::new(config.simulated_delay());
            if config.simulate_failure() {
                Ok(Arc::new(transport.failing()))
            } else {
                Ok(Arc::new(transport))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_simulated() {
        let transport = from_config(&ContactConfig::default()).unwrap();
        assert_eq!(transport.name(), "simulated");
    }

    #[test]
    fn test_simulated_failure_is_configurable() {
        let config = ContactConfig {
            simulated_delay_ms: Some(0),
            simulate_failure: Some(true),
            ..Default::default()
        };
        let transport = from_config(&config).unwrap();
        let submission = crate::submission::fixtures::submission_with(|_| {}, chrono::Utc::now());

        let result = tokio_test::block_on(transport.deliver(&submission));
        assert!(matches!(result, Err(TransportError::Simulated)));
    }

    #[test]
    fn test_api_key_selects_email_api() {
        let config = ContactConfig {
            api_key: Some("re_123".to_string()),
            ..Default::default()
        };
        let transport = from_config(&config).unwrap();
        assert_eq!(transport.name(), "email-api");
    }
}
