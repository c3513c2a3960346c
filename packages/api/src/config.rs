//! # Client configuration: `eagletask.toml`
//!
//! Defines where the backend lives and how patiently the client waits for it
//! to wake up. The file is optional: every field has a production default, so
//! a missing or empty document equals [`GatewayConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [backend]
//! base_url = "http://localhost:8000"
//! request_timeout_secs = 60     # native builds only
//!
//! [retry]
//! max_attempts = 25             # cold-start ceiling for validation and wake-up
//! delay_ms = 5000               # fixed pause between attempts
//! ```
//!
//! Web builds are configured at compile time: when `EAGLETASK_BACKEND_URL` is
//! set in the build environment, [`GatewayConfig::from_build_env`] uses it as
//! the base URL.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::retry::RetryPolicy;

/// Top-level configuration stored in `eagletask.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub retry: RetryConfig,
}

/// Backend location and request limits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout. Ignored on wasm, where the browser owns timeouts.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// Cold-start retry settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    60
}

fn default_max_attempts() -> u32 {
    25
}

fn default_delay_ms() -> u64 {
    5000
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            delay_ms: default_delay_ms(),
        }
    }
}

impl RetryConfig {
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, Duration::from_millis(self.delay_ms))
    }
}

impl BackendConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl GatewayConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: String) -> Self {
        Self {
            backend: BackendConfig {
                base_url,
                ..BackendConfig::default()
            },
            retry: RetryConfig::default(),
        }
    }

    /// Builder method to set the retry ceiling and delay.
    pub fn with_retry(mut self, max_attempts: u32, delay_ms: u64) -> Self {
        self.retry = RetryConfig {
            max_attempts,
            delay_ms,
        };
        self
    }

    /// Defaults, with the base URL taken from `EAGLETASK_BACKEND_URL` at
    /// build time when present.
    pub fn from_build_env() -> Self {
        match option_env!("EAGLETASK_BACKEND_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim().to_string()),
            _ => Self::default(),
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "eagletask.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
