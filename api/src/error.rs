//! Error type shared by every console operation.

use thiserror::Error;

/// Everything that can go wrong between a button press and a reconciled store.
///
/// The `Display` form of each variant is what the console shows inline, so
/// server messages are rendered verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq, strum::EnumIs)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("{}", status_message(*status, body))]
    Status { status: u16, body: String },

    /// The response body was not the expected entity shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// A required local input was left empty; no request was sent.
    #[error("{0} is required")]
    MissingInput(&'static str),

    /// The operation needs an open item but the page has none.
    #[error("nothing is selected")]
    NoSelection,

    /// An endpoint could not be built from the configured base URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

fn status_message(status: u16, body: &str) -> String {
    if body.trim().is_empty() {
        let reason = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("request failed");
        format!("HTTP {status} {reason}")
    } else {
        body.to_string()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
