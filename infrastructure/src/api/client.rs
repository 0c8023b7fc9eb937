//! HTTP client for the trivia API.
//!
//! Wraps two verbs, [`HttpApiClient::fetch_json`] (GET) and
//! [`HttpApiClient::submit_json`] (POST). Every request carries the
//! configured `api_key` query parameter, timed-out requests are retried per
//! the [`RetryPolicy`], and every surfaced failure is logged first.

use super::failure::{classify_status, classify_transport, report_failure};
use super::retry::RetryPolicy;
use globetrotter_application::ApiError;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Query parameter carrying the API key.
pub const API_KEY_PARAM: &str = "api_key";

/// Errors constructing the client.
#[derive(Error, Debug)]
pub enum ApiClientError {
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Settings for [`HttpApiClient`].
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Per-attempt timeout.
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: Duration::from_millis(1000),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retry.retries = retries;
        self
    }

    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry.backoff = backoff;
        self
    }
}

/// JSON-over-HTTP client for the trivia API.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    retry: RetryPolicy,
}

impl HttpApiClient {
    pub fn new(config: ApiClientConfig) -> Result<Self, ApiClientError> {
        let invalid = |reason: String| ApiClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason,
        };
        let parsed = Url::parse(&config.base_url).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("not a base URL".to_string()));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("globetrotter/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            retry: config.retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and decode the JSON body.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        self.call(Method::GET, path, query, None::<&()>).await
    }

    /// POST `body` as JSON to `path` and decode the JSON response.
    ///
    /// An empty response body decodes as JSON `null`.
    pub async fn submit_json<B, T>(
        &self,
        path: &str,
        body: &B,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.call(Method::POST, path, query, Some(body)).await
    }

    async fn call<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let label = format!("{} {}", method, path);
        let result = self
            .retry
            .run(&label, || self.attempt(method.clone(), path, query, body))
            .await;

        if let Err(e) = &result {
            report_failure(method.as_str(), path, e);
        }
        result
    }

    /// One attempt: send the request and decode the response.
    async fn attempt<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let mut request = self.request(method, path, query);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| classify_transport(&e))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| classify_transport(&e))?;

        debug!(path, status = status.as_u16(), bytes = bytes.len(), "Response received");

        if !status.is_success() {
            return Err(classify_status(status, &bytes));
        }

        let bytes: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };
        serde_json::from_slice(bytes).map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }

    fn request(&self, method: Method, path: &str, query: &[(&str, &str)]) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut request = self.http.request(method, url).query(query);
        if let Some(key) = &self.api_key {
            request = request.query(&[(API_KEY_PARAM, key.as_str())]);
        }
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_server::{TestServer, request_body, unreachable_base_url};
    use serde_json::Value;

    fn client(base_url: String) -> HttpApiClient {
        HttpApiClient::new(
            ApiClientConfig::new(base_url)
                .with_timeout(Duration::from_millis(100))
                .with_api_key("secret"),
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let err = HttpApiClient::new(ApiClientConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, ApiClientError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = HttpApiClient::new(ApiClientConfig::new("http://localhost:9/api/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9/api");
    }

    #[tokio::test]
    async fn test_timeout_retries_until_budget_spent() {
        let server = TestServer::silent().await;
        let client = HttpApiClient::new(
            ApiClientConfig::new(server.base_url())
                .with_timeout(Duration::from_millis(100))
                .with_retries(2),
        )
        .unwrap();

        let err = client.fetch_json::<Value>("/questions", &[]).await.unwrap_err();
        assert_eq!(err, ApiError::Timeout { attempts: 3 });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(server.connections(), 3);
    }

    #[tokio::test]
    async fn test_submit_timeout_resends_identical_body() {
        let server = TestServer::silent().await;
        let client = HttpApiClient::new(
            ApiClientConfig::new(server.base_url())
                .with_timeout(Duration::from_millis(100))
                .with_retries(2),
        )
        .unwrap();

        let body = serde_json::json!({ "username": "bob", "score": 7, "link": "https://x.test" });
        let err = client
            .submit_json::<_, Value>("/users", &body, &[])
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Timeout { attempts: 3 });

        tokio::time::sleep(Duration::from_millis(50)).await;
        let requests = server.requests();
        assert_eq!(requests.len(), 3);
        for request in &requests {
            assert!(request.starts_with("POST /users HTTP/1.1"));
            assert_eq!(request_body(request), request_body(&requests[0]));
        }
        let sent: Value = serde_json::from_str(request_body(&requests[0])).unwrap();
        assert_eq!(sent, body);
    }

    #[tokio::test]
    async fn test_api_key_appended_to_query() {
        let server = TestServer::canned(200, r#"{"data":[]}"#).await;
        let client = client(server.base_url());

        let body: Value = client.fetch_json("/questions", &[("page", "1")]).await.unwrap();
        assert_eq!(body["data"], Value::Array(vec![]));

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert!(
            requests[0].starts_with("GET /questions?page=1&api_key=secret HTTP/1.1"),
            "unexpected request: {}",
            requests[0]
        );
    }

    #[tokio::test]
    async fn test_server_error_not_retried() {
        let server = TestServer::canned(500, r#"{"message":"boom"}"#).await;
        let client = client(server.base_url());

        let err = client.fetch_json::<Value>("/questions", &[]).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                message: Some("boom".to_string())
            }
        );
        assert_eq!(server.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_not_found_classified() {
        let server = TestServer::canned(404, "").await;
        let client = client(server.base_url());

        let err = client.fetch_json::<Value>("/users/bob", &[]).await.unwrap_err();
        assert_eq!(err, ApiError::NotFound);
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = TestServer::canned(200, "<html>").await;
        let client = client(server.base_url());

        let err = client.fetch_json::<Value>("/questions", &[]).await.unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let client = client(unreachable_base_url().await);

        let err = client.fetch_json::<Value>("/questions", &[]).await.unwrap_err();
        assert!(matches!(err, ApiError::Unreachable(_)));
    }

    #[tokio::test]
    async fn test_submit_sends_json_body() {
        let server = TestServer::canned(201, "").await;
        let client = client(server.base_url());

        let body = serde_json::json!({ "username": "bob", "score": 7 });
        let response: Value = client.submit_json("/users", &body, &[]).await.unwrap();
        assert_eq!(response, Value::Null);

        let request = &server.requests()[0];
        assert!(request.starts_with("POST /users?api_key=secret HTTP/1.1"));
        assert!(request.to_lowercase().contains("content-type: application/json"));
        assert!(request.contains(r#""username":"bob""#));
    }
}
