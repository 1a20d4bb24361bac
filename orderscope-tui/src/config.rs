//! Runtime configuration.
//!
//! Resolution order: config file, then the `ORDERSCOPE_BASE_URL`
//! environment variable, then the built-in default. A missing or
//! malformed config file is not an error.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the backend listens when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8081";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the order backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl AppConfig {
    /// Path of the config file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("orderscope")
            .join("config.json")
    }

    /// Load configuration, falling back to defaults.
    pub fn load() -> Self {
        let mut config = Self::load_file().unwrap_or_default();

        if let Ok(url) = env::var("ORDERSCOPE_BASE_URL") {
            if !url.is_empty() {
                config.base_url = url;
            }
        }

        config
    }

    fn load_file() -> Option<Self> {
        let path = Self::config_path();
        let content = fs::read_to_string(&path).ok()?;

        match serde_json::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("ignoring malformed config at {}: {e}", path.display());
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8081");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn file_value_round_trips() {
        let config: AppConfig =
            serde_json::from_str(r#"{"base_url": "http://orders.internal:9000"}"#).unwrap();
        assert_eq!(config.base_url, "http://orders.internal:9000");
    }
}
