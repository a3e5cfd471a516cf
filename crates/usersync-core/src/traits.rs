//! Collaborator traits consumed by the synchronizer.
//!
//! The synchronizer never talks to a concrete SDK. It depends on:
//!
//! - [`IdentityProviderClient`] - the three admin operations on the remote store
//! - [`ClientDetailProvider`] - pool, client and region identifiers
//! - [`SyncableUser`] - the user being synchronized
//! - [`SyncLogger`] - where classified failures are reported

use async_trait::async_trait;
use secrecy::SecretString;

use crate::error::{RemoteResult, SyncResult};
use crate::request::SyncRequest;

/// Remote attribute holding the email address.
pub const EMAIL_ATTRIBUTE: &str = "email";

/// Remote attribute marking the email address as verified.
pub const EMAIL_VERIFIED_ATTRIBUTE: &str = "email_verified";

/// A user whose attributes can be synchronized to a remote store.
pub trait SyncableUser: Send + Sync {
    /// The `Username` key addressing this user in the remote store.
    fn syncable_username(&self) -> &str;
}

/// Identifiers of the remote user pool and app client.
pub trait ClientDetailProvider: Send + Sync {
    /// The user pool every admin call targets.
    fn pool_id(&self) -> &str;

    /// The app client id.
    fn client_id(&self) -> &str;

    /// The region hosting the pool.
    fn region(&self) -> &str;
}

/// Sink for the synchronizer's classified outcomes.
pub trait SyncLogger: Send + Sync {
    /// Record an informational message.
    fn info(&self, message: &str);

    /// Record an error message.
    fn error(&self, message: &str);
}

/// A single name/value attribute on a remote user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAttribute {
    pub name: String,
    pub value: String,
}

impl UserAttribute {
    /// Create an attribute.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Admin operations on a remote identity-provider user pool.
#[async_trait]
pub trait IdentityProviderClient: Send + Sync {
    /// Set a user's password.
    ///
    /// When `permanent` is false the remote store treats the password as a
    /// one-time password that must be changed at next sign-in.
    async fn admin_set_user_password(
        &self,
        pool_id: &str,
        username: &str,
        password: &SecretString,
        permanent: bool,
    ) -> RemoteResult<()>;

    /// Replace the given attributes on a user record, in order.
    async fn admin_update_user_attributes(
        &self,
        pool_id: &str,
        username: &str,
        attributes: &[UserAttribute],
    ) -> RemoteResult<()>;

    /// Delete a user record.
    async fn admin_delete_user(&self, pool_id: &str, username: &str) -> RemoteResult<()>;
}

/// Something that can push a user's changes to an external store.
#[async_trait]
pub trait UserSync: Send + Sync {
    /// Synchronize `request` for `user`.
    ///
    /// Returns `Ok(true)` when the remote store reflects the request,
    /// `Ok(false)` when it could not be brought in line, and `Err` only when
    /// the request itself is unusable.
    async fn sync(&self, user: &dyn SyncableUser, request: &SyncRequest) -> SyncResult<bool>;
}
