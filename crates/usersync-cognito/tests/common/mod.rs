//! Common test utilities for usersync-cognito integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use serde_json::{json, Value};
use usersync_cognito::{CognitoClientDetail, CognitoIdentityClient, StaticCredentials};
use usersync_core::{SyncLogger, SyncableUser, Synchronizer};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const POOL_ID: &str = "us-east-1_TestPool";
pub const CLIENT_ID: &str = "test-client-id";

const AMZ_JSON: &str = "application/x-amz-json-1.1";
const TARGET_PREFIX: &str = "AWSCognitoIdentityProviderService";

static INIT: Once = Once::new();

/// Initialize logging for tests (once).
pub fn init_test_logging() {
    INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::fmt()
                .with_test_writer()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .try_init()
                .ok();
        }
    });
}

/// Client details pointing at `endpoint_url` with dummy credentials.
pub fn test_detail(endpoint_url: &str) -> CognitoClientDetail {
    CognitoClientDetail::new(POOL_ID, CLIENT_ID, "us-east-1")
        .with_endpoint_url(endpoint_url)
        .with_credentials(StaticCredentials::new("AKIDTEST", "test-secret-key"))
}

/// Creates a Cognito JSON error body.
pub fn create_error_body(code: &str, message: &str) -> Value {
    json!({
        "__type": code,
        "message": message
    })
}

/// Mock server speaking the Cognito JSON 1.1 protocol.
pub struct MockCognitoServer {
    pub server: MockServer,
}

impl MockCognitoServer {
    pub async fn new() -> Self {
        init_test_logging();
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn url(&self) -> String {
        self.server.uri()
    }

    pub fn detail(&self) -> CognitoClientDetail {
        test_detail(&self.url())
    }

    pub fn client(&self) -> CognitoIdentityClient {
        CognitoIdentityClient::from_static_detail(&self.detail())
            .expect("static client should build")
    }

    /// Expect exactly `times` calls of `operation` whose body includes
    /// `body`, answering with an empty success.
    pub async fn expect_success(&self, operation: &str, body: Value, times: u64) {
        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("x-amz-target", format!("{TARGET_PREFIX}.{operation}").as_str()))
            .and(body_partial_json(body))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{}", AMZ_JSON))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Answer every call of `operation` with a service error.
    pub async fn mock_error(&self, operation: &str, status: u16, code: &str, message: &str) {
        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("x-amz-target", format!("{TARGET_PREFIX}.{operation}").as_str()))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_raw(create_error_body(code, message).to_string(), AMZ_JSON),
            )
            .mount(&self.server)
            .await;
    }

    /// Fail the test if `operation` is ever called.
    pub async fn expect_never(&self, operation: &str) {
        Mock::given(method("POST"))
            .and(header("x-amz-target", format!("{TARGET_PREFIX}.{operation}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{}", AMZ_JSON))
            .expect(0)
            .mount(&self.server)
            .await;
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

pub struct TestUser(pub &'static str);

impl SyncableUser for TestUser {
    fn syncable_username(&self) -> &str {
        self.0
    }
}

/// A synchronizer wired to the mock server, with a recording logger.
pub fn synchronizer(mock: &MockCognitoServer) -> (Synchronizer, Arc<RecordingLogger>) {
    let logger = Arc::new(RecordingLogger::default());
    let synchronizer = Synchronizer::new(
        Arc::new(mock.client()),
        Arc::new(mock.detail()),
        logger.clone(),
    );
    (synchronizer, logger)
}
