//! Configuration module for alertdeck.
//!
//! Loads configuration from environment variables with sensible defaults.

use std::env;

/// Dashboard configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Base URL of the alert backend (default: "http://127.0.0.1:8000")
    pub base_url: String,
    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: 10,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ALERTDECK_BASE_URL`: alert backend base URL (default: "http://127.0.0.1:8000")
    /// - `ALERTDECK_TIMEOUT_SECS`: request timeout in seconds (default: 10)
    pub fn load() -> Self {
        let mut cfg = Self::default();

        if let Ok(base_url) = env::var("ALERTDECK_BASE_URL") {
            cfg.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Ok(timeout_str) = env::var("ALERTDECK_TIMEOUT_SECS") {
            if let Ok(timeout) = timeout_str.parse() {
                cfg.timeout_secs = timeout;
            }
        }

        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.base_url, "http://127.0.0.1:8000");
        assert_eq!(cfg.timeout_secs, 10);
    }
}
