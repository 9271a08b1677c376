use reqwest::StatusCode;
use thiserror::Error;

/// Normalized error for every REST call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("API returned status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to decode response: {0}")]
    Decode(String),
    #[error("Invalid API configuration: {0}")]
    InvalidConfig(String),
}

/// A typed API result.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Builds a [`ApiError::Status`] from a non-success response.
    ///
    /// The backend reports failures as `{ "message": "..." }` or
    /// `{ "error": "..." }`; anything else falls back to the reason phrase.
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|payload| {
                ["message", "error", "detail"].iter().find_map(|key| {
                    payload
                        .get(key)
                        .and_then(|v| v.as_str())
                        .filter(|s| !s.trim().is_empty())
                        .map(str::to_owned)
                })
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_owned()
            });

        Self::Status {
            status: status.as_u16(),
            message,
        }
    }

    /// Message suitable for display next to a table or form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
