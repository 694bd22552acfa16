//! The HTTP request wrapper every resource call goes through.
//!
//! Wraps a shared `reqwest::Client` with the storefront wire conventions:
//! base-URL resolution, the `x-user-id` identity header, JSON bodies, and
//! the backend's `{ "error": ... }` failure envelope.

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::identity::Identity;

/// Header carrying the client-asserted identity.
///
/// This header is the entirety of the authorization mechanism at this
/// layer; the backend is trusted to do real verification.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Client for the storefront HTTP API.
///
/// Stateless per call; holds only the connection pool and the resolved
/// base URL. Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from configuration.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url(),
        }
    }

    /// The base URL requests resolve against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a path against the base URL; absolute URLs pass through.
    fn resolve(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_owned()
        } else {
            format!("{}{path}", self.base_url)
        }
    }

    /// Issue a bodiless GET.
    ///
    /// # Errors
    ///
    /// See [`Self::request`].
    pub async fn get<T>(&self, path: &str, identity: Option<&Identity>) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.request(Method::GET, path, None::<&()>, identity).await
    }

    /// Issue a POST with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`Self::request`].
    pub async fn post<T, B>(&self, path: &str, body: &B, identity: Option<&Identity>) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body), identity).await
    }

    /// Execute a request and decode the JSON response.
    ///
    /// Always sends `Content-Type: application/json`. When `identity` is
    /// supplied its user id travels in the [`USER_ID_HEADER`] header; with
    /// no identity the header is absent. A body that fails to parse as JSON
    /// is treated as an empty object, so error-envelope extraction and
    /// empty-success responses behave uniformly.
    ///
    /// # Errors
    ///
    /// - `ApiError::Http` when the transport fails
    /// - `ApiError::Status` for non-success statuses, with the server's
    ///   `error` field as the message when present
    /// - `ApiError::Decode` when a success body does not match `T`
    #[instrument(skip(self, body, identity), fields(method = %method, path = %path))]
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        identity: Option<&Identity>,
    ) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.resolve(path);

        let mut builder = self
            .http
            .request(method, &url)
            .header("Content-Type", "application/json");
        if let Some(identity) = identity {
            builder = builder.header(USER_ID_HEADER, identity.user_id.as_str());
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();

        // Read the body as text first so malformed JSON still yields a
        // usable error path.
        let response_text = response.text().await?;
        let value: Value = serde_json::from_str(&response_text)
            .unwrap_or_else(|_| Value::Object(Map::new()));

        if !status.is_success() {
            let message = error_message(status, &value);
            tracing::warn!(
                status = %status,
                message = %message,
                "storefront API returned non-success status"
            );
            return Err(ApiError::Status { status, message });
        }

        debug!(status = %status, "storefront API request succeeded");
        serde_json::from_value(value).map_err(ApiError::Decode)
    }
}

/// Failure message for a non-success response: the server-provided `error`
/// field when present, else the status's canonical reason text.
fn error_message(status: StatusCode, body: &Value) -> String {
    body.get("error")
        .and_then(Value::as_str)
        .map_or_else(
            || {
                status
                    .canonical_reason()
                    .map_or_else(|| status.to_string(), ToOwned::to_owned)
            },
            ToOwned::to_owned,
        )
}
