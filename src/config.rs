use std::env;

use crate::services::altafinzione::bearer::{decode_base64_text, DEFAULT_BEARER_SOURCE};
use crate::services::altafinzione::client::DEFAULT_USER_AGENT;

/// Site root, base64 encoded so it does not show up in plain text
const ENCODED_SITE_URL: &str = "aHR0cHM6Ly9hbHRhZGVmaW5pemlvbmVjb21tdW5pdHkub25saW5l";

/// Decoded default site root
pub fn default_site_url() -> String {
    decode_base64_text(ENCODED_SITE_URL).unwrap_or_default()
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub app_env: String,

    // Provider
    pub site_url: String,
    pub bearer_source_url: String,

    // Fetching
    pub fetch_timeout_ms: u64,
    pub user_agent: String,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            // Server
            port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .unwrap_or(3001),
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),

            // Provider
            site_url: env::var("SITE_URL").unwrap_or_else(|_| default_site_url()),
            bearer_source_url: env::var("BEARER_SOURCE_URL")
                .unwrap_or_else(|_| DEFAULT_BEARER_SOURCE.to_string()),

            // Fetching
            fetch_timeout_ms: env::var("FETCH_TIMEOUT_MS")
                .unwrap_or_else(|_| "30000".to_string())
                .parse()
                .unwrap_or(30_000), // 30 seconds

            user_agent: env::var("USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
