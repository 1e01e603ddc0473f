//! Errors surfaced by [`crate::ApiClient`].

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("{message} (HTTP {status})")]
    Server { status: u16, message: String },
    /// A 2xx response whose body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a [`ApiError::Server`] from a status code and the raw response body.
    ///
    /// The backend reports failures as `{"error": "..."}`; `message` is also
    /// accepted. Anything else falls back to the canonical status text.
    pub fn from_response(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            error: Option<serde_json::Value>,
            message: Option<String>,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| match b.error {
                Some(serde_json::Value::String(s)) => Some(s),
                Some(serde_json::Value::Null) | None => b.message,
                Some(other) => Some(other.to_string()),
            })
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| {
                reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Request failed")
                    .to_string()
            });

        Self::Server { status, message }
    }

    /// HTTP status for server errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
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
