//! Unified error system for VMS
//!
//! Two layers:
//! - [`HttpError`]: what a single request can fail with (no response, or a
//!   response carrying a JSON `error` field)
//! - [`VmsError`]: everything the application layer returns
//!
//! Both map onto an [`ErrorCategory`], which decides how a view treats the
//! failure (inline text, silent redirect, or success-equivalent).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Message shown when the backend could not be reached at all.
pub const UNREACHABLE_MESSAGE: &str = "Could not reach the server. Is the server running?";

// ============================================================================
// Error Categories
// ============================================================================

/// How a failure should be treated by the view that caught it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// Backend unreachable (no response)
    Network,
    /// 4xx with an `error` field, shown verbatim
    Validation,
    /// 409, success-equivalent for idempotent actions
    Conflict,
    /// Guard or role mismatch, handled by redirect
    Authorization,
    /// 5xx, shown verbatim
    Server,
    /// Decode, storage or configuration failures
    Internal,
}

impl ErrorCategory {
    /// Classify an HTTP status code.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            409 => Self::Conflict,
            400..=499 => Self::Validation,
            _ => Self::Server,
        }
    }

    /// Whether an idempotent action failing this way already holds server-side.
    #[must_use]
    pub fn is_success_equivalent(&self) -> bool {
        matches!(self, Self::Conflict)
    }

    /// Short label for logging.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Network => "Network",
            Self::Validation => "Validation",
            Self::Conflict => "Conflict",
            Self::Authorization => "Authorization",
            Self::Server => "Server",
            Self::Internal => "Internal",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// HTTP Errors
// ============================================================================

/// Failure of a single backend request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum HttpError {
    /// No response reached us (connection refused, DNS, timeout)
    #[error("Network error: {message}")]
    Network {
        /// Transport-level description
        message: String,
    },

    /// A non-2xx response was received
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// The response's JSON `error` field, or a generic fallback
        message: String,
    },

    /// A 2xx response whose body did not have the expected shape
    #[error("Decode error: {message}")]
    Decode {
        /// Deserializer message
        message: String,
    },
}

impl HttpError {
    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a server error
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// HTTP status, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Network { .. } | Self::Decode { .. } => None,
        }
    }

    /// Categorize for view handling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Network { .. } => ErrorCategory::Network,
            Self::Server { status, .. } => ErrorCategory::from_status(*status),
            Self::Decode { .. } => ErrorCategory::Internal,
        }
    }

    /// Text a view shows inline for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network { .. } => UNREACHABLE_MESSAGE.to_string(),
            Self::Server { message, .. } => message.clone(),
            Self::Decode { .. } => "Unexpected response from the server.".to_string(),
        }
    }
}

// ============================================================================
// Application Errors
// ============================================================================

/// Unified error type for all VMS application operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum VmsError {
    /// A backend request failed
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Input rejected before any request was issued
    #[error("Invalid: {message}")]
    Invalid {
        /// What was wrong with the input
        message: String,
    },

    /// Action not allowed from the current local state
    #[error("Invalid transition: cannot {action} while {state}")]
    InvalidTransition {
        /// Attempted action
        action: String,
        /// State the item was in
        state: String,
    },

    /// Session persistence failed
    #[error("Storage error: {message}")]
    Storage {
        /// Error message describing the storage failure
        message: String,
    },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {message}")]
    Config {
        /// Error message describing the configuration issue
        message: String,
    },

    /// Serialization/deserialization error outside a request
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message describing the serialization failure
        message: String,
    },

    /// Guard resolution did not settle on a renderable route
    #[error("Redirect loop while resolving {path}")]
    RedirectLoop {
        /// Path that started the resolution
        path: String,
    },
}

impl VmsError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create an invalid transition error
    pub fn invalid_transition(action: impl Into<String>, state: impl fmt::Display) -> Self {
        Self::InvalidTransition {
            action: action.into(),
            state: state.to_string(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Categorize for view handling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Http(err) => err.category(),
            Self::Invalid { .. } | Self::InvalidTransition { .. } => ErrorCategory::Validation,
            Self::RedirectLoop { .. } => ErrorCategory::Authorization,
            Self::Storage { .. } | Self::Config { .. } | Self::Serialization { .. } => {
                ErrorCategory::Internal
            }
        }
    }

    /// Text a view shows inline for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(err) => err.user_message(),
            Self::Invalid { message } => message.clone(),
            other => other.to_string(),
        }
    }

    /// The underlying HTTP error, if this came from a request.
    pub fn as_http(&self) -> Option<&HttpError> {
        match self {
            Self::Http(err) => Some(err),
            _ => None,
        }
    }
}

/// Standard Result type for VMS operations
pub type Result<T> = std::result::Result<T, VmsError>;

impl From<std::io::Error> for VmsError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(err.to_string())
    }
}

impl From<serde_json::Error> for VmsError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(ErrorCategory::from_status(409), ErrorCategory::Conflict);
        assert_eq!(ErrorCategory::from_status(400), ErrorCategory::Validation);
        assert_eq!(ErrorCategory::from_status(401), ErrorCategory::Validation);
        assert_eq!(ErrorCategory::from_status(403), ErrorCategory::Validation);
        assert_eq!(ErrorCategory::from_status(500), ErrorCategory::Server);
    }

    #[test]
    fn test_network_error_message() {
        let err = HttpError::network("connection refused");
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.user_message(), UNREACHABLE_MESSAGE);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_server_error_shown_verbatim() {
        let err = HttpError::server(400, "Invalid event data. Name, date, and description are required.");
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(
            err.user_message(),
            "Invalid event data. Name, date, and description are required."
        );
        assert!(!err.category().is_success_equivalent());
    }

    #[test]
    fn test_conflict_is_success_equivalent() {
        let err = HttpError::server(409, "Already registered");
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(err.category().is_success_equivalent());
        assert!(!ErrorCategory::Validation.is_success_equivalent());
    }

    #[test]
    fn test_vms_error_wraps_http() {
        let err: VmsError = HttpError::server(500, "Database error").into();
        assert_eq!(err.category(), ErrorCategory::Server);
        assert_eq!(err.user_message(), "Database error");
        assert!(err.as_http().is_some());
    }

    #[test]
    fn test_invalid_transition_display() {
        let err = VmsError::invalid_transition("leave", "not a member");
        assert_eq!(
            err.to_string(),
            "Invalid transition: cannot leave while not a member"
        );
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn test_redirect_loop_is_authorization() {
        let err = VmsError::RedirectLoop {
            path: "/home".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Authorization);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = VmsError::from(io_err);
        assert!(matches!(err, VmsError::Storage { .. }));
    }
}
