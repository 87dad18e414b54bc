//! Intake client configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the intake submission client.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Base URL for the acceptance API (e.g., "https://api.intake.example.com").
    pub api_base_url: String,

    /// URL of the ASCII-armored public encryption key.
    pub public_key_url: String,

    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.intake.example.com".to_string(),
            public_key_url: "https://api.intake.example.com/public-key.asc".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl IntakeConfig {
    /// Creates a config serving both the API and the key from one base URL.
    pub fn for_base_url(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            public_key_url: format!("{base}/public-key.asc"),
            api_base_url: base,
            request_timeout_secs: 30,
        }
    }
}
