//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::state::DEFAULT_SUCCESS_TTL;
use crate::transport::{simulated::DEFAULT_DELAY, EmailApiSettings, DEFAULT_ENDPOINT};

const DEFAULT_SENDER: &str = "nettside@fanebust-anlegg.no";
const DEFAULT_RECIPIENT: &str = "post@fanebust-anlegg.no";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Environment variables that override the config file
pub const ENV_API_KEY: &str = "CONTACT_TUI_API_KEY";
pub const ENV_ENDPOINT: &str = "CONTACT_TUI_ENDPOINT";
pub const ENV_RECIPIENT: &str = "CONTACT_TUI_RECIPIENT";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactConfig {
    /// Email API endpoint
    pub endpoint: Option<String>,
    /// Email API key; without one submissions are only simulated
    pub api_key: Option<String>,
    /// Sender address of the generated email
    pub sender: Option<String>,
    /// Inbox that receives contact requests
    pub recipient: Option<String>,
    /// Timeout for one API request
    pub request_timeout_secs: Option<u64>,
    /// Delay of the simulated transport
    pub simulated_delay_ms: Option<u64>,
    /// Make the simulated transport fail every delivery
    pub simulate_failure: Option<bool>,
    /// How long the success message stays visible
    pub message_ttl_secs: Option<u64>,
}

impl ContactConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("no", "fanebust", "contact-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("no", "fanebust", "contact-tui").map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: ContactConfig = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "Loaded config file");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Overlay values from the environment; `lookup` is `std::env::var` outside tests
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(endpoint) = non_empty(ENV_ENDPOINT) {
            self.endpoint = Some(endpoint);
        }
        if let Some(recipient) = non_empty(ENV_RECIPIENT) {
            self.recipient = Some(recipient);
        }
    }

    /// Email API settings, if an API key is configured
    pub fn email_api(&self) -> Option<EmailApiSettings> {
        let api_key = self.api_key.clone().filter(|k| !k.trim().is_empty())?;
        Some(EmailApiSettings {
            endpoint: self
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            api_key,
            sender: self
                .sender
                .clone()
                .unwrap_or_else(|| DEFAULT_SENDER.to_string()),
            recipient: self
                .recipient
                .clone()
                .unwrap_or_else(|| DEFAULT_RECIPIENT.to_string()),
            timeout: Duration::from_secs(
                self.request_timeout_secs
                    .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            ),
        })
    }

    pub fn simulated_delay(&self) -> Duration {
        self.simulated_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DELAY)
    }

    pub fn simulate_failure(&self) -> bool {
        self.simulate_failure.unwrap_or(false)
    }

    pub fn message_ttl(&self) -> Duration {
        self.message_ttl_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_SUCCESS_TTL)
    }
}
