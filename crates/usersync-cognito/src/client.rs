//! Cognito user pool admin client (aws-sdk-based).
//!
//! Implements [`IdentityProviderClient`] on top of
//! `aws-sdk-cognitoidentityprovider`. SDK retries are disabled; a failed call
//! is reported once and classified into a [`RemoteError`].

use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider as cognito;
use cognito::config::retry::RetryConfig;
use cognito::config::{BehaviorVersion, Credentials, Region};
use cognito::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use cognito::operation::admin_delete_user::AdminDeleteUserError;
use cognito::operation::admin_set_user_password::AdminSetUserPasswordError;
use cognito::operation::admin_update_user_attributes::AdminUpdateUserAttributesError;
use cognito::types::AttributeType;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, instrument};
use usersync_core::{
    ClientDetailProvider, IdentityProviderClient, RemoteError, RemoteResult, UserAttribute,
};

use crate::config::CognitoClientDetail;
use crate::error::{CognitoError, CognitoResult};

/// Error code Cognito reports for a missing user.
pub const USER_NOT_FOUND_CODE: &str = "UserNotFoundException";

const CREDENTIALS_PROVIDER_NAME: &str = "usersync-explicit";

/// Admin client for a Cognito user pool.
#[derive(Debug, Clone)]
pub struct CognitoIdentityClient {
    client: cognito::Client,
}

impl CognitoIdentityClient {
    /// Wrap an existing SDK client.
    #[must_use]
    pub fn new(client: cognito::Client) -> Self {
        Self { client }
    }

    /// Build a client from pool details, resolving anything not given
    /// explicitly through the standard AWS configuration chain.
    pub async fn from_detail(detail: &CognitoClientDetail) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(detail.region().to_string()))
            .retry_config(RetryConfig::disabled());

        if let Some(endpoint_url) = detail.endpoint_url() {
            loader = loader.endpoint_url(endpoint_url);
        }

        if let Some(credentials) = detail.credentials() {
            loader = loader.credentials_provider(Credentials::new(
                credentials.access_key_id(),
                credentials.secret_access_key().expose_secret(),
                None, // session token
                None, // expiry
                CREDENTIALS_PROVIDER_NAME,
            ));
        }

        let sdk_config = loader.load().await;

        info!(
            region = %detail.region(),
            pool_id = %detail.pool_id(),
            explicit_creds = detail.credentials().is_some(),
            endpoint_override = detail.endpoint_url().is_some(),
            "Cognito client initialized"
        );

        Self::new(cognito::Client::new(&sdk_config))
    }

    /// Build a client purely from `detail`, without consulting the
    /// environment. Explicit credentials are required.
    pub fn from_static_detail(detail: &CognitoClientDetail) -> CognitoResult<Self> {
        let credentials = detail.credentials().ok_or(CognitoError::MissingCredentials)?;

        let mut builder = cognito::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(detail.region().to_string()))
            .retry_config(RetryConfig::disabled())
            .credentials_provider(Credentials::new(
                credentials.access_key_id(),
                credentials.secret_access_key().expose_secret(),
                None,
                None,
                CREDENTIALS_PROVIDER_NAME,
            ));

        if let Some(endpoint_url) = detail.endpoint_url() {
            builder = builder.endpoint_url(endpoint_url);
        }

        Ok(Self::new(cognito::Client::from_conf(builder.build())))
    }
}

#[async_trait]
impl IdentityProviderClient for CognitoIdentityClient {
    #[instrument(skip(self, password))]
    async fn admin_set_user_password(
        &self,
        pool_id: &str,
        username: &str,
        password: &SecretString,
        permanent: bool,
    ) -> RemoteResult<()> {
        self.client
            .admin_set_user_password()
            .user_pool_id(pool_id)
            .username(username)
            .password(password.expose_secret())
            .permanent(permanent)
            .send()
            .await
            .map_err(|e| classify(e, AdminSetUserPasswordError::is_user_not_found_exception))?;

        debug!("Password set");
        Ok(())
    }

    #[instrument(skip(self, attributes), fields(attribute_count = attributes.len()))]
    async fn admin_update_user_attributes(
        &self,
        pool_id: &str,
        username: &str,
        attributes: &[UserAttribute],
    ) -> RemoteResult<()> {
        let attributes = attributes
            .iter()
            .map(to_attribute_type)
            .collect::<RemoteResult<Vec<_>>>()?;

        self.client
            .admin_update_user_attributes()
            .user_pool_id(pool_id)
            .username(username)
            .set_user_attributes(Some(attributes))
            .send()
            .await
            .map_err(|e| {
                classify(
                    e,
                    AdminUpdateUserAttributesError::is_user_not_found_exception,
                )
            })?;

        debug!("Attributes updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn admin_delete_user(&self, pool_id: &str, username: &str) -> RemoteResult<()> {
        self.client
            .admin_delete_user()
            .user_pool_id(pool_id)
            .username(username)
            .send()
            .await
            .map_err(|e| classify(e, AdminDeleteUserError::is_user_not_found_exception))?;

        debug!("User deleted");
        Ok(())
    }
}

fn to_attribute_type(attribute: &UserAttribute) -> RemoteResult<AttributeType> {
    AttributeType::builder()
        .name(&attribute.name)
        .value(&attribute.value)
        .build()
        .map_err(|e| {
            RemoteError::transport(format!("invalid attribute '{}': {e}", attribute.name))
        })
}

/// Map an SDK failure onto the remote error kinds.
///
/// Only a service response is a service error; everything else (dispatch
/// failures, timeouts, unparseable responses) is a transport error.
fn classify<E, R>(err: SdkError<E, R>, is_user_not_found: fn(&E) -> bool) -> RemoteError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    match err {
        SdkError::ServiceError(context) => from_service_error(&context.into_err(), is_user_not_found),
        other => RemoteError::transport(DisplayErrorContext(&other).to_string()),
    }
}

fn from_service_error<E>(err: &E, is_user_not_found: fn(&E) -> bool) -> RemoteError
where
    E: ProvideErrorMetadata + std::fmt::Display,
{
    if is_user_not_found(err) || err.code() == Some(USER_NOT_FOUND_CODE) {
        return RemoteError::UserNotFound;
    }

    RemoteError::service(
        err.code().unwrap_or("Unknown"),
        err.message().map_or_else(|| err.to_string(), str::to_string),
    )
}
