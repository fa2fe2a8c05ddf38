use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the terminal counter demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Delay before the EFFECT action's follow-up INCREMENT (default: 1000).
    #[serde(default = "default_effect_delay_ms")]
    pub effect_delay_ms: u64,
    /// Endpoint returning `{ "message": <image url>, "status": "success" }`.
    #[serde(default = "default_dog_api_url")]
    pub dog_api_url: String,
    /// Timeout for the dog image request in seconds (default: 10).
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
    /// How often the view redraws without store changes (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Logging settings. Both can be overridden from the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log file base path. Logging is off when neither this nor
    /// `STATEBUS_LOG` is set.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_effect_delay_ms() -> u64 {
    1000
}

fn default_dog_api_url() -> String {
    "https://dog.ceo/api/breeds/image/random".to_string()
}

fn default_request_timeout_seconds() -> u64 {
    10
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            effect_delay_ms: default_effect_delay_ms(),
            dog_api_url: default_dog_api_url(),
            request_timeout_seconds: default_request_timeout_seconds(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}
