//! GitHub REST API client for Actions secrets.
//!
//! Every operation returns a uniform [`ApiResult`] envelope: the parsed
//! response body, an ok/ko status, and the HTTP status code. Non-2xx
//! responses are data, not errors; only transport failures propagate as
//! [`crate::error::Error::Transport`].

use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::core::config::Credentials;
use crate::core::target::Target;
use crate::error::Result;

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Remote call status: `ok` for 2xx responses, `ko` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Ok,
    Ko,
}

/// Uniform envelope for every remote call.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResult {
    pub result: Value,
    pub status: ApiStatus,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl ApiResult {
    /// Build an envelope from response parts.
    ///
    /// The body is parsed as JSON when the content type says JSON,
    /// otherwise it is kept as raw text. A body that fails to parse despite
    /// a JSON content type is also kept as raw text so it is still surfaced.
    pub fn from_parts(status_code: u16, content_type: Option<&str>, body: &str) -> Self {
        let is_json = content_type.is_some_and(|ct| ct.contains("application/json"));
        let result = if is_json {
            serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
        } else {
            Value::String(body.to_string())
        };

        let status = if (200..300).contains(&status_code) {
            ApiStatus::Ok
        } else {
            ApiStatus::Ko
        };

        Self {
            result,
            status,
            status_code,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ApiStatus::Ok
    }

    /// Deserialize the parsed body into a concrete type.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if the body does not match `T`.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.result.clone())?)
    }
}

/// The target's public key, used to seal secret values before submission.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicKey {
    /// Base64-encoded Curve25519 public key.
    pub key: String,
    /// Opaque key identifier, echoed back when submitting a secret.
    pub key_id: String,
}

/// Request body for creating or updating a secret.
#[derive(Debug, Serialize)]
struct PutSecretBody<'a> {
    encrypted_value: &'a str,
    key_id: &'a str,
}

/// Authenticated client for the secrets endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl ApiClient {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(credentials, DEFAULT_BASE_URL)
    }

    /// Client pointed at an alternate API root. Used by tests.
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            credentials,
        }
    }

    /// GET `{base}/{pathSlice}/actions/secrets/public-key`.
    pub async fn fetch_public_key(&self, target: &Target) -> Result<ApiResult> {
        let path = format!("{}/actions/secrets/public-key", target.path_slice());
        self.send(Method::GET, &path, None).await
    }

    /// GET `{base}/{pathSlice}/actions/secrets`.
    pub async fn list_secrets(&self, target: &Target) -> Result<ApiResult> {
        let path = format!("{}/actions/secrets", target.path_slice());
        self.send(Method::GET, &path, None).await
    }

    /// GET `{base}/{pathSlice}/actions/secrets/{name}`.
    pub async fn fetch_secret(&self, target: &Target, name: &str) -> Result<ApiResult> {
        self.send(Method::GET, &secret_path(target, name), None).await
    }

    /// PUT `{base}/{pathSlice}/actions/secrets/{name}` with the encrypted
    /// value and the key id it was sealed against.
    pub async fn put_secret(
        &self,
        target: &Target,
        name: &str,
        encrypted_value: &str,
        key_id: &str,
    ) -> Result<ApiResult> {
        let body = serde_json::to_value(PutSecretBody {
            encrypted_value,
            key_id,
        })?;
        self.send(Method::PUT, &secret_path(target, name), Some(body))
            .await
    }

    /// DELETE `{base}/{pathSlice}/actions/secrets/{name}`.
    pub async fn delete_secret(&self, target: &Target, name: &str) -> Result<ApiResult> {
        self.send(Method::DELETE, &secret_path(target, name), None)
            .await
    }

    /// Issue one authenticated request and normalize the response.
    ///
    /// No retries, no timeout overrides beyond the transport defaults.
    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<ApiResult> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.token))
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, APP_USER_AGENT);

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;

        let status_code = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let text = response.text().await?;

        Ok(ApiResult::from_parts(
            status_code,
            content_type.as_deref(),
            &text,
        ))
    }
}

fn secret_path(target: &Target, name: &str) -> String {
    format!("{}/actions/secrets/{}", target.path_slice(), name)
}
