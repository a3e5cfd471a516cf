//! AWS Cognito backend for usersync
//!
//! This crate implements the usersync-core client traits for Cognito user
//! pools via the official AWS SDK.
//!
//! # Example
//!
//! ```no_run
//! use usersync_cognito::{build_synchronizer, CognitoClientDetail};
//! use usersync_core::{SyncRequest, SyncableUser, UserSync};
//!
//! struct User(String);
//!
//! impl SyncableUser for User {
//!     fn syncable_username(&self) -> &str {
//!         &self.0
//!     }
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let detail = CognitoClientDetail::from_env()?;
//! let synchronizer = build_synchronizer(detail).await;
//!
//! let request = SyncRequest::update().with_email_address("new@example.com");
//! let synced = synchronizer
//!     .sync(&User("old@example.com".into()), &request)
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;

use std::sync::Arc;

use usersync_core::Synchronizer;

// Re-exports
pub use client::{CognitoIdentityClient, USER_NOT_FOUND_CODE};
pub use config::{CognitoClientDetail, ConfigError, StaticCredentials};
pub use error::{CognitoError, CognitoResult};

/// Build a [`Synchronizer`] backed by Cognito, logging through `tracing`.
pub async fn build_synchronizer(detail: CognitoClientDetail) -> Synchronizer {
    let client = CognitoIdentityClient::from_detail(&detail).await;
    Synchronizer::with_tracing_logger(Arc::new(client), Arc::new(detail))
}
