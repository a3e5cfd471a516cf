//! Cognito client details parsed from environment variables.

use secrecy::SecretString;
use usersync_core::ClientDetailProvider;

/// Environment variable naming the user pool.
pub const POOL_ID_VAR: &str = "COGNITO_USER_POOL_ID";
/// Environment variable naming the app client.
pub const CLIENT_ID_VAR: &str = "COGNITO_CLIENT_ID";
/// Environment variable naming the pool's region.
pub const REGION_VAR: &str = "COGNITO_REGION";
/// Fallback region variable shared with the AWS tooling.
pub const AWS_REGION_VAR: &str = "AWS_REGION";
/// Optional endpoint override (local emulators, tests).
pub const ENDPOINT_URL_VAR: &str = "COGNITO_ENDPOINT_URL";
/// Explicit access key id.
pub const ACCESS_KEY_ID_VAR: &str = "AWS_ACCESS_KEY_ID";
/// Explicit secret access key.
pub const SECRET_ACCESS_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";

/// Explicit AWS credentials. When absent the default provider chain is used.
#[derive(Clone)]
pub struct StaticCredentials {
    access_key_id: String,
    secret_access_key: SecretString,
}

impl StaticCredentials {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: SecretString::from(secret_access_key.into()),
        }
    }

    #[must_use]
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    #[must_use]
    pub fn secret_access_key(&self) -> &SecretString {
        &self.secret_access_key
    }
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .finish()
    }
}

/// Identifiers and connection settings for a Cognito user pool.
#[derive(Debug, Clone)]
pub struct CognitoClientDetail {
    pool_id: String,
    client_id: String,
    region: String,
    endpoint_url: Option<String>,
    credentials: Option<StaticCredentials>,
}

impl CognitoClientDetail {
    /// Create client details for a pool.
    pub fn new(
        pool_id: impl Into<String>,
        client_id: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            pool_id: pool_id.into(),
            client_id: client_id.into(),
            region: region.into(),
            endpoint_url: None,
            credentials: None,
        }
    }

    /// Send requests to `endpoint_url` instead of the regional endpoint.
    #[must_use]
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Use explicit credentials instead of the default provider chain.
    #[must_use]
    pub fn with_credentials(mut self, credentials: StaticCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    #[must_use]
    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }

    #[must_use]
    pub fn credentials(&self) -> Option<&StaticCredentials> {
        self.credentials.as_ref()
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_reader(|key| std::env::var(key))
    }

    /// Load configuration from a custom variable reader.
    ///
    /// Reads:
    /// - `COGNITO_USER_POOL_ID` (required)
    /// - `COGNITO_CLIENT_ID` (required)
    /// - `COGNITO_REGION`, else `AWS_REGION`, else the pool id's region prefix
    /// - `COGNITO_ENDPOINT_URL` (optional)
    /// - `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY` (optional, both or neither)
    pub fn from_reader<F>(reader: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let read = |key: &str| reader(key).ok().filter(|v| !v.trim().is_empty());

        let pool_id = read(POOL_ID_VAR).ok_or_else(|| ConfigError::MissingVar(POOL_ID_VAR.into()))?;
        let client_id =
            read(CLIENT_ID_VAR).ok_or_else(|| ConfigError::MissingVar(CLIENT_ID_VAR.into()))?;

        let region = read(REGION_VAR)
            .or_else(|| read(AWS_REGION_VAR))
            .or_else(|| region_from_pool_id(&pool_id).map(str::to_string))
            .ok_or_else(|| ConfigError::MissingVar(REGION_VAR.into()))?;

        let endpoint_url = read(ENDPOINT_URL_VAR);
        if let Some(url) = &endpoint_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidValue(
                    ENDPOINT_URL_VAR.into(),
                    format!("'{url}' is not an http(s) URL"),
                ));
            }
        }

        let credentials = match (read(ACCESS_KEY_ID_VAR), read(SECRET_ACCESS_KEY_VAR)) {
            (Some(access_key_id), Some(secret_access_key)) => {
                Some(StaticCredentials::new(access_key_id, secret_access_key))
            }
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::InvalidValue(
                    SECRET_ACCESS_KEY_VAR.into(),
                    format!("must be set together with {ACCESS_KEY_ID_VAR}"),
                ))
            }
            (None, Some(_)) => {
                return Err(ConfigError::InvalidValue(
                    ACCESS_KEY_ID_VAR.into(),
                    format!("must be set together with {SECRET_ACCESS_KEY_VAR}"),
                ))
            }
        };

        Ok(Self {
            pool_id,
            client_id,
            region,
            endpoint_url,
            credentials,
        })
    }
}

impl ClientDetailProvider for CognitoClientDetail {
    fn pool_id(&self) -> &str {
        &self.pool_id
    }

    fn client_id(&self) -> &str {
        &self.client_id
    }

    fn region(&self) -> &str {
        &self.region
    }
}

/// Pool ids are `<region>_<suffix>`, e.g. `us-east-1_AbC123`.
fn region_from_pool_id(pool_id: &str) -> Option<&str> {
    pool_id
        .split_once('_')
        .map(|(region, _)| region)
        .filter(|region| !region.is_empty())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(String),

    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),
}
