//! Error types for user synchronization.
//!
//! Two families live here. [`SyncError`] is returned to the caller when the
//! request itself is unusable. [`RemoteError`] is what an
//! [`IdentityProviderClient`](crate::traits::IdentityProviderClient) reports;
//! the synchronizer absorbs it into a boolean result plus a log entry.

use thiserror::Error;

/// Error returned to the caller of a sync operation.
///
/// These indicate caller misuse, not a remote condition, and are never
/// folded into the boolean result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The request names an action the synchronizer does not know.
    #[error("unsupported sync action: {action}")]
    UnsupportedAction { action: String },
}

impl SyncError {
    /// Create an unsupported action error.
    pub fn unsupported_action(action: impl Into<String>) -> Self {
        SyncError::UnsupportedAction {
            action: action.into(),
        }
    }
}

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Error reported by the remote identity store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// The remote store has no record for the username.
    #[error("User not found")]
    UserNotFound,

    /// The remote store rejected the call.
    #[error("{message}")]
    Service { code: String, message: String },

    /// The call never produced a service response (network, timeout, decoding).
    #[error("{message}")]
    Transport { message: String },
}

impl RemoteError {
    /// Create a service error.
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        RemoteError::Service {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        RemoteError::Transport {
            message: message.into(),
        }
    }

    /// Whether this condition should not count as a failed sync.
    ///
    /// The local system is the source of truth for user existence, so a
    /// missing remote record never blocks a local change.
    #[must_use]
    pub fn is_benign(&self) -> bool {
        matches!(self, RemoteError::UserNotFound)
    }

    /// The human-readable message to log for this error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            RemoteError::UserNotFound => "User not found",
            RemoteError::Service { message, .. } | RemoteError::Transport { message } => message,
        }
    }

    /// Get an error code for classification.
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            RemoteError::UserNotFound => "USER_NOT_FOUND",
            RemoteError::Service { code, .. } => code,
            RemoteError::Transport { .. } => "TRANSPORT_ERROR",
        }
    }
}

/// Result type for remote identity store calls.
pub type RemoteResult<T> = Result<T, RemoteError>;
