// Rust guideline compliant 2026-10-14

//! Instagram publishing client.
//!
//! Publishing an image is a two-step Graph API contract: a media container
//! is created from a public image URL and caption, then the container is
//! published. [`GraphClient`] issues each step as a form-encoded POST through
//! a [`Transport`], so tests can swap the network for a recording stub.

pub mod graph;
pub mod http;
#[cfg(any(test, feature = "test-support"))]
pub mod mock;

pub use graph::GraphClient;
pub use http::HttpTransport;

use thiserror::Error;

/// Environment variable holding the Graph API access token.
pub const ACCESS_TOKEN_VAR: &str = "INSTAGRAM_ACCESS_TOKEN";

/// Environment variable holding the Instagram account (ig-user) id.
pub const ACCOUNT_ID_VAR: &str = "INSTAGRAM_ACCOUNT_ID";

/// Errors from the publishing client.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Credentials are not configured.
    #[error("missing credentials: set {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    /// The request could not be sent or the response could not be read.
    #[error("request failed: {0}")]
    Transport(String),

    /// The API answered with an `error` object.
    #[error("Instagram API error: {message}")]
    Api {
        /// Error message reported by the API.
        message: String,
        /// Numeric error code, when reported.
        code: Option<i64>,
    },

    /// The API answered without an `id`.
    #[error("response did not contain an id")]
    MissingId,

    /// The response body was not JSON.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Form-encoded POST seam used by [`GraphClient`].
pub trait Transport {
    /// Sends a form-encoded POST and returns the parsed JSON body.
    ///
    /// Implementations return the body regardless of HTTP status so the
    /// caller can inspect the API's own `error` field.
    ///
    /// # Errors
    ///
    /// Returns `PublishError::Transport` or `PublishError::InvalidResponse`
    /// when no JSON body could be obtained.
    fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> Result<serde_json::Value, PublishError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> Result<serde_json::Value, PublishError> {
        (**self).post_form(url, form)
    }
}

/// Account credentials for the Graph API.
#[derive(Clone)]
pub struct Credentials {
    access_token: String,
    account_id: String,
}

impl Credentials {
    /// Creates credentials from explicit values.
    pub fn new(access_token: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            account_id: account_id.into(),
        }
    }

    /// Reads credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `PublishError::MissingCredentials` naming every unset or
    /// blank variable.
    pub fn from_env() -> Result<Self, PublishError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads credentials through a custom lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Credentials::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PublishError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value: &String| !value.trim().is_empty());
        let token = read(ACCESS_TOKEN_VAR);
        let account = read(ACCOUNT_ID_VAR);
        match (token, account) {
            (Some(token), Some(account)) => Ok(Self::new(token.trim(), account.trim())),
            (token, account) => {
                let mut missing = Vec::new();
                if token.is_none() {
                    missing.push(ACCESS_TOKEN_VAR);
                }
                if account.is_none() {
                    missing.push(ACCOUNT_ID_VAR);
                }
                Err(PublishError::MissingCredentials(missing))
            }
        }
    }

    /// Returns the account id.
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub(crate) fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .field("account_id", &self.account_id)
            .finish()
    }
}
