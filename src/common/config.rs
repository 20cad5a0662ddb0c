// src/common/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::AccountIntegrity;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout_seconds: u64,
    pub store_path: PathBuf,
    pub account_integrity: AccountIntegrity,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5050/api".to_string(),
            timeout_seconds: 30,
            store_path: PathBuf::from("./.account.json"),
            account_integrity: AccountIntegrity::TokenAndName,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source, falling back to
    /// defaults for anything missing or unparsable
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // API_URL - base URL of the account API, without trailing slash
        if let Some(url) = lookup("API_URL") {
            let url = url.trim().trim_end_matches('/');
            if !url.is_empty() {
                config.api_url = url.to_string();
            }
        }

        // HTTP_TIMEOUT_SECONDS - request timeout for the transport, must be positive
        if let Some(timeout) = lookup("HTTP_TIMEOUT_SECONDS") {
            if let Ok(val) = timeout.trim().parse::<u64>() {
                if val > 0 {
                    config.timeout_seconds = val;
                }
            }
        }

        // ACCOUNT_STORE_PATH - file backing the key-value store
        if let Some(path) = lookup("ACCOUNT_STORE_PATH") {
            if !path.trim().is_empty() {
                config.store_path = PathBuf::from(path.trim());
            }
        }

        // ACCOUNT_REQUIRE_NAME - set to "false" to accept token-only accounts
        if let Some(require_name) = lookup("ACCOUNT_REQUIRE_NAME") {
            config.account_integrity = if require_name.trim().to_lowercase() == "false" {
                AccountIntegrity::TokenOnly
            } else {
                AccountIntegrity::TokenAndName
            };
        }

        config
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Absolute URL for an API path such as `/login`
    pub fn make_api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}
