//! Sync requests: what changed for a user, and what to do about it.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::SyncError;

/// Property key carrying the new password.
pub const PASSWORD_KEY: &str = "password";

/// Property key carrying the new email address.
pub const EMAIL_ADDRESS_KEY: &str = "email_address";

/// Property key carrying the action tag.
pub const ACTION_KEY: &str = "action";

/// Action used when the input does not name one.
pub const DEFAULT_ACTION: &str = "update";

/// The supported synchronization actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncAction {
    /// Push a new password and/or email address.
    Update,
    /// Remove the user from the remote store.
    Delete,
}

impl SyncAction {
    /// Wire name of the action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncAction::Update => "update",
            SyncAction::Delete => "delete",
        }
    }
}

impl FromStr for SyncAction {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "update" => Ok(SyncAction::Update),
            "delete" => Ok(SyncAction::Delete),
            other => Err(SyncError::unsupported_action(other)),
        }
    }
}

impl fmt::Display for SyncAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw shape of a request as it arrives from JSON.
#[derive(Debug, Default, Deserialize)]
struct RawSyncRequest {
    password: Option<String>,
    email_address: Option<String>,
    action: Option<String>,
}

/// A description of the user attributes that changed locally.
///
/// Both fields are tri-state: absent, present but blank, or present with a
/// value. Only the last counts for [`has_password`](Self::has_password) and
/// [`has_email_address`](Self::has_email_address).
///
/// The action is kept as the raw string. It is validated when the request is
/// dispatched, and only if the request is not empty.
#[derive(Debug, Deserialize)]
#[serde(from = "RawSyncRequest")]
pub struct SyncRequest {
    password: Option<SecretString>,
    email_address: Option<String>,
    action: String,
}

impl SyncRequest {
    /// An empty `update` request.
    #[must_use]
    pub fn update() -> Self {
        Self::default()
    }

    /// An empty `delete` request.
    #[must_use]
    pub fn delete() -> Self {
        Self::default().with_action(SyncAction::Delete.as_str())
    }

    /// Build a request from raw key/value properties.
    ///
    /// Reads `password`, `email_address` and `action`. Missing or null
    /// values are absent; a missing or null action becomes `update`. No
    /// validation happens here.
    #[must_use]
    pub fn from_properties<S: std::hash::BuildHasher>(
        properties: &HashMap<String, Option<String>, S>,
    ) -> Self {
        let get = |key: &str| properties.get(key).cloned().flatten();

        RawSyncRequest {
            password: get(PASSWORD_KEY),
            email_address: get(EMAIL_ADDRESS_KEY),
            action: get(ACTION_KEY),
        }
        .into()
    }

    /// Set the password.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(SecretString::from(password.into()));
        self
    }

    /// Set the email address.
    #[must_use]
    pub fn with_email_address(mut self, email_address: impl Into<String>) -> Self {
        self.email_address = Some(email_address.into());
        self
    }

    /// Set the raw action tag.
    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    /// The password, if one was supplied (possibly blank).
    #[must_use]
    pub fn password(&self) -> Option<&SecretString> {
        self.password.as_ref()
    }

    /// The email address, if one was supplied (possibly blank).
    #[must_use]
    pub fn email_address(&self) -> Option<&str> {
        self.email_address.as_deref()
    }

    /// The raw action tag.
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Parse the action tag.
    pub fn sync_action(&self) -> Result<SyncAction, SyncError> {
        self.action.parse()
    }

    /// True if a non-blank password is present.
    #[must_use]
    pub fn has_password(&self) -> bool {
        is_filled(self.password.as_ref().map(|p| p.expose_secret()))
    }

    /// True if a non-blank email address is present.
    #[must_use]
    pub fn has_email_address(&self) -> bool {
        is_filled(self.email_address.as_deref())
    }

    /// True if there is nothing to synchronize.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.has_password() && !self.has_email_address()
    }
}

impl Default for SyncRequest {
    fn default() -> Self {
        RawSyncRequest::default().into()
    }
}

impl From<RawSyncRequest> for SyncRequest {
    fn from(raw: RawSyncRequest) -> Self {
        Self {
            password: raw.password.map(SecretString::from),
            email_address: raw.email_address,
            action: raw.action.unwrap_or_else(|| DEFAULT_ACTION.to_string()),
        }
    }
}

fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}
