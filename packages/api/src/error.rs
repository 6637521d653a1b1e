use thiserror::Error;

/// Everything that can go wrong talking to the backend.
///
/// Variants carry strings rather than source errors so results stay
/// `Clone + PartialEq` and can live inside Dioxus signals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    /// 401, or Laravel's 419 for a missing/expired CSRF token.
    #[error("not authenticated")]
    Unauthenticated,

    #[error("not found")]
    NotFound,

    /// 422 with the backend's validation message.
    #[error("validation failed: {message}")]
    Validation { message: String },

    #[error("unexpected status {status}")]
    Status { status: u16 },

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("invalid url {0:?}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Map a non-success HTTP status to an error.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 | 419 => Self::Unauthenticated,
            404 => Self::NotFound,
            422 => Self::Validation {
                message: message.unwrap_or_default(),
            },
            _ => Self::Status { status },
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
