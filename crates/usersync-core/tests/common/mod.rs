//! Test doubles for synchronizer integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use secrecy::{ExposeSecret, SecretString};
use usersync_core::async_trait;
use usersync_core::prelude::*;

pub const POOL_ID: &str = "pool-id";

/// A remote call as seen by [`RecordingClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    SetPassword {
        pool_id: String,
        username: String,
        password: String,
        permanent: bool,
    },
    UpdateAttributes {
        pool_id: String,
        username: String,
        attributes: Vec<UserAttribute>,
    },
    DeleteUser {
        pool_id: String,
        username: String,
    },
}

/// Records every call and answers with a scripted result.
#[derive(Debug, Default)]
pub struct RecordingClient {
    calls: Mutex<Vec<RemoteCall>>,
    failure: Mutex<Option<RemoteError>>,
}

impl RecordingClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Every subsequent call fails with `error`.
    pub fn failing_with(error: RemoteError) -> Arc<Self> {
        let client = Self::default();
        *client.failure.lock().unwrap() = Some(error);
        Arc::new(client)
    }

    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RemoteCall) -> RemoteResult<()> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl IdentityProviderClient for RecordingClient {
    async fn admin_set_user_password(
        &self,
        pool_id: &str,
        username: &str,
        password: &SecretString,
        permanent: bool,
    ) -> RemoteResult<()> {
        self.record(RemoteCall::SetPassword {
            pool_id: pool_id.to_string(),
            username: username.to_string(),
            password: password.expose_secret().to_string(),
            permanent,
        })
    }

    async fn admin_update_user_attributes(
        &self,
        pool_id: &str,
        username: &str,
        attributes: &[UserAttribute],
    ) -> RemoteResult<()> {
        self.record(RemoteCall::UpdateAttributes {
            pool_id: pool_id.to_string(),
            username: username.to_string(),
            attributes: attributes.to_vec(),
        })
    }

    async fn admin_delete_user(&self, pool_id: &str, username: &str) -> RemoteResult<()> {
        self.record(RemoteCall::DeleteUser {
            pool_id: pool_id.to_string(),
            username: username.to_string(),
        })
    }
}

/// A logged line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    Info(String),
    Error(String),
}

#[derive(Debug, Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingLogger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl SyncLogger for RecordingLogger {
    fn info(&self, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push(LogEntry::Info(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push(LogEntry::Error(message.to_string()));
    }
}

#[derive(Debug)]
pub struct StaticClientDetail;

impl ClientDetailProvider for StaticClientDetail {
    fn pool_id(&self) -> &str {
        POOL_ID
    }

    fn client_id(&self) -> &str {
        "client-id"
    }

    fn region(&self) -> &str {
        "us-east-1"
    }
}

#[derive(Debug)]
pub struct TestUser(pub &'static str);

impl SyncableUser for TestUser {
    fn syncable_username(&self) -> &str {
        self.0
    }
}

/// A synchronizer wired to the given doubles.
pub fn synchronizer(client: &Arc<RecordingClient>, logger: &Arc<RecordingLogger>) -> Synchronizer {
    Synchronizer::new(
        client.clone(),
        Arc::new(StaticClientDetail),
        logger.clone(),
    )
}
