//! Runtime configuration.
//!
//! The Todoist credential and base URL are resolved once at startup and never
//! mutated afterwards. A missing token is fatal: the server refuses to start.

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Versioned base URL of the Todoist REST API.
pub const DEFAULT_API_URL: &str = "https://api.todoist.com/rest/v2";

/// Configuration errors. All of them abort startup.
#[derive(Error, Diagnostic, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Todoist API token is not set")]
    #[diagnostic(
        code(todoist_mcp::config::missing_token),
        help(
            "Set the TODOIST_API_TOKEN environment variable or pass --token.\nThe token is listed in Todoist under Settings > Integrations > Developer."
        )
    )]
    MissingToken,

    #[error("Invalid Todoist API URL '{url}': {reason}")]
    #[diagnostic(code(todoist_mcp::config::invalid_url))]
    InvalidUrl { url: String, reason: String },
}

/// Immutable process-wide configuration.
#[derive(Clone)]
pub struct Config {
    api_token: String,
    api_url: String,
}

impl Config {
    /// Build the configuration from optional raw values.
    ///
    /// The token is trimmed and must not be blank. The URL falls back to
    /// [`DEFAULT_API_URL`] and loses any trailing slash.
    pub fn new(api_token: Option<String>, api_url: Option<String>) -> Result<Self, ConfigError> {
        let api_token = api_token
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let api_url = api_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        if !(api_url.starts_with("https://") || api_url.starts_with("http://")) {
            return Err(ConfigError::InvalidUrl {
                url: api_url,
                reason: "expected an http:// or https:// URL".to_string(),
            });
        }

        Ok(Self { api_token, api_url })
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_token", &"<redacted>")
            .field("api_url", &self.api_url)
            .finish()
    }
}
