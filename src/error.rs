//! Unified SDK error types.
//!
//! Two families reach the user-visible error slot:
//! - **Transport** ([`HttpError`]) — the request never produced a usable
//!   success response (network failure, non-2xx status, undecodable body).
//! - **Semantic** ([`SdkError::Semantic`]) — a well-formed success response
//!   that describes a domain-level failure, e.g. "player not found".

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// Domain-level failure reported inside a successful response.
    #[error("{0}")]
    Semantic(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SdkError {
    /// Text shown in a view's error slot.
    ///
    /// Transport errors expose the server-provided message (or the
    /// `"<status> <reason>"` fallback); semantic errors expose the domain
    /// message verbatim.
    pub fn user_message(&self) -> String {
        match self {
            SdkError::Http(e) => e.message(),
            SdkError::Semantic(msg) | SdkError::Validation(msg) | SdkError::Other(msg) => {
                msg.clone()
            }
            SdkError::Serde(e) => e.to_string(),
        }
    }

    pub fn is_semantic(&self) -> bool {
        matches!(self, SdkError::Semantic(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, SdkError::Http(_))
    }
}

/// HTTP-layer (transport) errors.
#[derive(Error, Debug)]
pub enum HttpError {
    /// No response was received; carries the underlying cause.
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response. `message` comes from the JSON error body when one is
    /// present, otherwise `"<status> <reason>"`.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// A 2xx response whose body did not match the expected shape.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl HttpError {
    /// HTTP status, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            #[cfg(feature = "http")]
            HttpError::Network(e) => e.to_string(),
            HttpError::Status { message, .. } => message.clone(),
            HttpError::Decode(msg) => msg.clone(),
        }
    }
}

pub type SdkResult<T> = Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_displays_server_message() {
        let err = HttpError::Status {
            status: 404,
            message: "club not found".to_string(),
        };
        assert_eq!(err.to_string(), "club not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_user_message_for_transport_is_unprefixed() {
        let err: SdkError = HttpError::Status {
            status: 500,
            message: "500 Internal Server Error".to_string(),
        }
        .into();
        assert!(err.is_transport());
        assert_eq!(err.user_message(), "500 Internal Server Error");
    }

    #[test]
    fn test_user_message_for_semantic() {
        let err = SdkError::Semantic("player not found".to_string());
        assert!(err.is_semantic());
        assert!(!err.is_transport());
        assert_eq!(err.user_message(), "player not found");
    }
}
