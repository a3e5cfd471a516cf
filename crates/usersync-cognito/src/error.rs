//! Error types for building the Cognito client.

use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias using `CognitoError`.
pub type CognitoResult<T> = Result<T, CognitoError>;

/// Errors that can occur while setting up the Cognito client.
///
/// Failures of the admin calls themselves are reported as
/// [`RemoteError`](usersync_core::RemoteError).
#[derive(Debug, Error)]
pub enum CognitoError {
    /// Configuration validation error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A static client was requested without explicit credentials.
    #[error("Static client requires explicit AWS credentials")]
    MissingCredentials,
}
