//! Errors raised while talking to the GitHub REST API.

use reqwest::StatusCode;
use thiserror::Error;

/// A failed listing or member request. Any of these aborts the fetch it
/// occurred in; there is no retry.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error talking to GitHub: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GitHub API returned HTTP {}{}", .status.as_u16(), suffix(.message))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("failed to decode GitHub response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// The `message` field GitHub put in the error body, if there was one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            FetchError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

fn suffix(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(" ({m})"),
        None => String::new(),
    }
}

/// Pull the `message` string out of an error response body.
pub(crate) fn extract_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json.get("message")?.as_str().map(str::to_string)
}
