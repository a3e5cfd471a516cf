//! The sync decision engine.
//!
//! Given a user and a [`SyncRequest`], the [`Synchronizer`] decides which
//! remote admin operations to run, runs them in order, and folds any remote
//! failure into a [`SyncOutcome`]. Only an unsupported action escapes as an
//! error.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::error::{RemoteError, RemoteResult, SyncResult};
use crate::logger::TracingLogger;
use crate::request::{SyncAction, SyncRequest};
use crate::traits::{
    ClientDetailProvider, IdentityProviderClient, SyncLogger, SyncableUser, UserAttribute,
    UserSync, EMAIL_ATTRIBUTE, EMAIL_VERIFIED_ATTRIBUTE,
};

/// How a single sync call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The request carried no password or email; nothing was sent.
    NothingToSync,
    /// Every remote call succeeded.
    Synchronized,
    /// The remote store has no such user. Counted as success.
    UserNotFound,
    /// A delete request without an email address to delete.
    MissingTarget,
    /// A remote call failed.
    Failed(RemoteError),
}

impl SyncOutcome {
    /// Whether the outcome counts as a successful sync.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            SyncOutcome::NothingToSync | SyncOutcome::Synchronized | SyncOutcome::UserNotFound
        )
    }
}

impl fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncOutcome::NothingToSync => f.write_str("nothing to sync"),
            SyncOutcome::Synchronized => f.write_str("synchronized"),
            SyncOutcome::UserNotFound => f.write_str("user not found in remote store"),
            SyncOutcome::MissingTarget => f.write_str("no email address to delete"),
            SyncOutcome::Failed(err) => write!(f, "failed: {err}"),
        }
    }
}

/// Pushes user changes into a remote identity-provider user pool.
///
/// Holds no per-call state; clone it or share it behind an `Arc`.
#[derive(Clone)]
pub struct Synchronizer {
    client: Arc<dyn IdentityProviderClient>,
    client_detail: Arc<dyn ClientDetailProvider>,
    logger: Arc<dyn SyncLogger>,
}

impl Synchronizer {
    /// Create a synchronizer from its collaborators.
    pub fn new(
        client: Arc<dyn IdentityProviderClient>,
        client_detail: Arc<dyn ClientDetailProvider>,
        logger: Arc<dyn SyncLogger>,
    ) -> Self {
        Self {
            client,
            client_detail,
            logger,
        }
    }

    /// Create a synchronizer that logs through `tracing`.
    pub fn with_tracing_logger(
        client: Arc<dyn IdentityProviderClient>,
        client_detail: Arc<dyn ClientDetailProvider>,
    ) -> Self {
        Self::new(client, client_detail, Arc::new(TracingLogger::new()))
    }

    /// Synchronize `request` for `user`, reporting how it ended.
    ///
    /// An empty request succeeds without touching the remote store, whatever
    /// its action. Otherwise the action must be `update` or `delete`.
    #[instrument(
        skip_all,
        fields(username = %user.syncable_username(), action = %request.action())
    )]
    pub async fn sync_outcome(
        &self,
        user: &dyn SyncableUser,
        request: &SyncRequest,
    ) -> SyncResult<SyncOutcome> {
        if request.is_empty() {
            debug!("Nothing to sync");
            return Ok(SyncOutcome::NothingToSync);
        }

        let result = match request.sync_action()? {
            SyncAction::Update => self.update(user, request).await,
            SyncAction::Delete => self.delete(request).await,
        };

        Ok(match result {
            Ok(outcome) => outcome,
            Err(err) if err.is_benign() => {
                self.logger.info(err.message());
                SyncOutcome::UserNotFound
            }
            Err(err) => {
                self.logger.error(err.message());
                SyncOutcome::Failed(err)
            }
        })
    }

    async fn update(
        &self,
        user: &dyn SyncableUser,
        request: &SyncRequest,
    ) -> RemoteResult<SyncOutcome> {
        let pool_id = self.client_detail.pool_id();
        let username = user.syncable_username();

        if let Some(password) = request.password().filter(|_| request.has_password()) {
            debug!("Setting permanent password");
            self.client
                .admin_set_user_password(pool_id, username, password, true)
                .await?;
        }

        if let Some(email_address) = request
            .email_address()
            .filter(|_| request.has_email_address())
        {
            // Keyed by the current username; the email is a separate attribute.
            debug!("Updating email attributes");
            let attributes = [
                UserAttribute::new(EMAIL_ATTRIBUTE, email_address),
                UserAttribute::new(EMAIL_VERIFIED_ATTRIBUTE, "true"),
            ];
            self.client
                .admin_update_user_attributes(pool_id, username, &attributes)
                .await?;
        }

        Ok(SyncOutcome::Synchronized)
    }

    async fn delete(&self, request: &SyncRequest) -> RemoteResult<SyncOutcome> {
        // The request's email, not the user's username, names the record to delete.
        let Some(username) = request
            .email_address()
            .filter(|_| request.has_email_address())
        else {
            return Ok(SyncOutcome::MissingTarget);
        };

        debug!(target_username = %username, "Deleting user");
        self.client
            .admin_delete_user(self.client_detail.pool_id(), username)
            .await?;

        Ok(SyncOutcome::Synchronized)
    }
}

#[async_trait]
impl UserSync for Synchronizer {
    async fn sync(&self, user: &dyn SyncableUser, request: &SyncRequest) -> SyncResult<bool> {
        self.sync_outcome(user, request)
            .await
            .map(|outcome| outcome.is_success())
    }
}

impl fmt::Debug for Synchronizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Synchronizer")
            .field("pool_id", &self.client_detail.pool_id())
            .finish_non_exhaustive()
    }
}
