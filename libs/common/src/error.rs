//! Custom error types for the common library
//!
//! This module defines the error taxonomy shared by every catalog operation:
//! client-side validation failures, structured errors returned by the remote
//! service, and transport failures.

use thiserror::Error;

/// Message shown to users when the service could not be reached.
pub const NETWORK_FAILURE_MESSAGE: &str = "Could not reach the server, please try again";

/// Message shown to users when the server replied with a body we could not read.
pub const DECODE_FAILURE_MESSAGE: &str = "Unexpected response from the server, please try again";

/// Custom error type for catalog client operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Input rejected locally before any request was issued
    #[error("Validation error on `{field}`: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The server answered with an error body
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a body we could not understand
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Build a validation error for a form field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        ClientError::Validation {
            field,
            message: message.into(),
        }
    }

    /// The text a user should see for this failure.
    ///
    /// Validation and API messages are surfaced verbatim; transport and decode
    /// failures collapse to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Validation { message, .. } => message.clone(),
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Network(_) => NETWORK_FAILURE_MESSAGE.to_string(),
            ClientError::Decode(_) => DECODE_FAILURE_MESSAGE.to_string(),
            ClientError::Configuration(msg) => msg.clone(),
        }
    }

    /// True when the server rejected the caller's credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Api { status: 401 | 403, .. })
    }
}

/// Type alias for Result with ClientError
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_surfaces_api_message_verbatim() {
        let err = ClientError::Api {
            status: 409,
            message: "Category already exists".to_string(),
        };
        assert_eq!(err.user_message(), "Category already exists");
    }

    #[test]
    fn test_user_message_hides_transport_details() {
        let err = ClientError::Network("connection refused (os error 111)".to_string());
        assert_eq!(err.user_message(), NETWORK_FAILURE_MESSAGE);
    }

    #[test]
    fn test_user_message_for_unreadable_reply() {
        let err = ClientError::Decode("missing field `id` at line 1 column 2".to_string());
        assert_eq!(err.user_message(), DECODE_FAILURE_MESSAGE);
        assert_ne!(err.user_message(), NETWORK_FAILURE_MESSAGE);
    }

    #[test]
    fn test_is_unauthorized() {
        let err = ClientError::Api {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert!(err.is_unauthorized());
        assert!(!ClientError::Network("timeout".to_string()).is_unauthorized());
    }
}
