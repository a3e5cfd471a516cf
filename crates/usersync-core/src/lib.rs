//! # usersync core
//!
//! Decides which admin operations a local user change needs in a remote
//! identity-provider user pool, runs them, and classifies the failures.
//!
//! ## Architecture
//!
//! - [`SyncRequest`] - what changed: optional password, optional email, action tag
//! - [`Synchronizer`] - dispatches a request for a user and folds remote
//!   failures into a boolean
//! - [`IdentityProviderClient`] - the remote store, implemented elsewhere
//!   (see the `usersync-cognito` crate)
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use usersync_core::prelude::*;
//!
//! let synchronizer = Synchronizer::with_tracing_logger(client, client_detail);
//!
//! let request = SyncRequest::update().with_email_address("new@example.com");
//! let synced = synchronizer.sync(&user, &request).await?;
//! ```
//!
//! ## Failure handling
//!
//! | Condition                          | Result        | Log            |
//! |------------------------------------|---------------|----------------|
//! | empty request                      | `Ok(true)`    | none           |
//! | unsupported action                 | `Err`         | none           |
//! | remote user not found              | `Ok(true)`    | info           |
//! | other remote or transport error    | `Ok(false)`   | error          |
//! | delete without an email address    | `Ok(false)`   | none           |

pub mod error;
pub mod logger;
pub mod request;
pub mod synchronizer;
pub mod traits;

pub use error::{RemoteError, RemoteResult, SyncError, SyncResult};
pub use logger::TracingLogger;
pub use request::{SyncAction, SyncRequest};
pub use synchronizer::{SyncOutcome, Synchronizer};
pub use traits::{
    ClientDetailProvider, IdentityProviderClient, SyncLogger, SyncableUser, UserAttribute,
    UserSync,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{RemoteError, RemoteResult, SyncError, SyncResult};
    pub use crate::logger::TracingLogger;
    pub use crate::request::{SyncAction, SyncRequest};
    pub use crate::synchronizer::{SyncOutcome, Synchronizer};
    pub use crate::traits::{
        ClientDetailProvider, IdentityProviderClient, SyncLogger, SyncableUser, UserAttribute,
        UserSync,
    };
}

// Re-export async_trait for client implementors
pub use async_trait::async_trait;
