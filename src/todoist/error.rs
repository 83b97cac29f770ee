//! Todoist client error types.
//!
//! Every failure of an outbound call ends up as an [`ApiError`]; raw
//! `reqwest` errors never leave the client module.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to reach the Todoist API: {source}")]
    #[diagnostic(
        code(todoist_mcp::todoist::transport),
        help("Check network connectivity, or TODOIST_API_URL if it was overridden.")
    )]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    #[error("Todoist API error ({status}): {message}")]
    #[diagnostic(code(todoist_mcp::todoist::remote))]
    Remote { status: u16, message: String },

    #[error("Invalid response from the Todoist API: {message}")]
    #[diagnostic(code(todoist_mcp::todoist::invalid_response))]
    InvalidResponse { message: String },
}

impl ApiError {
    /// HTTP status returned by the remote service, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Stable machine-readable failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Transport { .. } => "transport",
            ApiError::Remote { .. } => "remote_service",
            ApiError::InvalidResponse { .. } => "invalid_response",
        }
    }

    /// Message without the kind prefix.
    pub fn message(&self) -> String {
        match self {
            ApiError::Transport { source } => source.to_string(),
            ApiError::Remote { message, .. } | ApiError::InvalidResponse { message } => {
                message.clone()
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::InvalidResponse {
                message: e.to_string(),
            }
        } else {
            ApiError::Transport { source: e }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
