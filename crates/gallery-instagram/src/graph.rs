// Rust guideline compliant 2026-10-14

//! Graph API content publishing calls.

use crate::{Credentials, PublishError, Transport};
use serde_json::Value;

/// Graph API client bound to one account.
pub struct GraphClient<T> {
    transport: T,
    credentials: Credentials,
    account_url: String,
}

impl<T: Transport> GraphClient<T> {
    /// Creates a client for `<api_base>/<api_version>/<account_id>`.
    pub fn new(transport: T, credentials: Credentials, api_base: &str, api_version: &str) -> Self {
        let account_url = format!(
            "{}/{}/{}",
            api_base.trim_end_matches('/'),
            api_version.trim_matches('/'),
            credentials.account_id()
        );
        Self {
            transport,
            credentials,
            account_url,
        }
    }

    /// Creates an image media container.
    ///
    /// # Arguments
    ///
    /// * `image_url` - Publicly reachable image URL
    /// * `caption` - Post caption
    ///
    /// # Returns
    ///
    /// The container (creation) id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API reports an error, or
    /// the response carries no id.
    pub fn create_media(&self, image_url: &str, caption: &str) -> Result<String, PublishError> {
        let url = format!("{}/media", self.account_url);
        tracing::debug!(%url, %image_url, "creating media container");
        let body = self.transport.post_form(
            &url,
            &[
                ("image_url", image_url),
                ("caption", caption),
                ("access_token", self.credentials.access_token()),
            ],
        )?;
        response_id(&body)
    }

    /// Publishes a previously created media container.
    ///
    /// # Returns
    ///
    /// The published post id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API reports an error, or
    /// the response carries no id.
    pub fn publish_media(&self, creation_id: &str) -> Result<String, PublishError> {
        let url = format!("{}/media_publish", self.account_url);
        tracing::debug!(%url, %creation_id, "publishing media container");
        let body = self.transport.post_form(
            &url,
            &[
                ("creation_id", creation_id),
                ("access_token", self.credentials.access_token()),
            ],
        )?;
        response_id(&body)
    }
}

/// Extracts the `id` of a Graph API response, surfacing its `error` field.
///
/// # Errors
///
/// Returns `PublishError::Api` when the body has a non-null `error`, and
/// `PublishError::MissingId` when it has neither an error nor an id.
pub fn response_id(body: &Value) -> Result<String, PublishError> {
    if let Some(error) = body.get("error").filter(|error| !error.is_null()) {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        let code = error.get("code").and_then(Value::as_i64);
        return Err(PublishError::Api { message, code });
    }

    match body.get("id") {
        Some(Value::String(id)) if !id.is_empty() => Ok(id.clone()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        _ => Err(PublishError::MissingId),
    }
}
