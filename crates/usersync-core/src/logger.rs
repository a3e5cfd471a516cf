//! `tracing`-backed [`SyncLogger`].

use crate::traits::SyncLogger;

/// Forwards sync log entries to `tracing` under the `usersync` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SyncLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "usersync", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "usersync", "{message}");
    }
}
