//! Transport abstraction shared by all field operations.
//!
//! A [`Transport`] turns an [`ApiRequest`] (method, endpoint path,
//! optional JSON body) into an [`ApiResponse`] envelope. The trait exists
//! to enable:
//! - Mocking for unit tests
//! - Alternative implementations
//! - Easier testing of async code
//!
//! [`HttpTransport`] is the real implementation over a shared
//! `reqwest::Client`.

use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, warn};
use url::Url;

use super::credential::BasicCredential;
use crate::config::{Config, parse_host};
use crate::error::{ApiError, ConfigError};
use crate::models::ApiResponse;

/// A single API request before execution.
///
/// The endpoint is a path relative to the site base URL, already
/// including any query string.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Relative endpoint path, e.g. `rest/api/3/field`.
    pub endpoint: String,
    /// Serialized JSON body, when the operation carries one.
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Builds a GET request for the given endpoint.
    #[must_use]
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            endpoint: endpoint.into(),
            body: None,
        }
    }

    /// Builds a POST request carrying a serialized JSON body.
    #[must_use]
    pub fn post(endpoint: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            method: Method::POST,
            endpoint: endpoint.into(),
            body: Some(body),
        }
    }

    /// Builds a DELETE request for the given endpoint.
    #[must_use]
    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self {
            method: Method::DELETE,
            endpoint: endpoint.into(),
            body: None,
        }
    }
}

/// Executes API requests and returns response envelopes.
///
/// Implementations must return the envelope for every response that
/// reaches a status line, embedding it in the error for non-success
/// statuses so callers can inspect the raw body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs the round trip for a single request.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] on connect or read failure, with a
    ///   partial envelope when the status line was received
    /// - [`ApiError::UnexpectedStatus`] for non-2xx responses, with the
    ///   full envelope
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Real transport over a shared `reqwest::Client`.
///
/// Cloning is cheap: the underlying connection pool is shared, so a
/// single transport can serve any number of concurrent calls.
///
/// # Example
///
/// ```rust,no_run
/// use jira_fields::{BasicCredential, HttpTransport};
///
/// let credential = BasicCredential::from_parts(
///     "dev@example.com".to_string(),
///     "api-token".to_string(),
/// );
/// let transport = HttpTransport::new("https://example.atlassian.net", credential)?;
/// # Ok::<(), jira_fields::error::ConfigError>(())
/// ```
#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: Url,
    credential: BasicCredential,
}

impl HttpTransport {
    /// Creates a transport for the given site.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the host is not a valid
    /// absolute URL or the HTTP client cannot be constructed.
    pub fn new(host: &str, credential: BasicCredential) -> Result<Self, ConfigError> {
        let base_url = parse_host(host)?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("jira-fields/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| ConfigError::InvalidValue {
                field: "http client".to_string(),
                message: err.to_string(),
            })?;

        Ok(Self {
            http,
            base_url,
            credential,
        })
    }

    /// Creates a transport from a resolved [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the HTTP client cannot
    /// be constructed.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Self::new(
            config.host.as_str(),
            BasicCredential::new(config.mail.clone(), config.token.clone()),
        )
    }

    /// Returns the normalized site base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn resolve(&self, endpoint: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(endpoint)
            .map_err(|err| ApiError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                message: err.to_string(),
            })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.resolve(&request.endpoint)?;
        let endpoint = url.to_string();
        debug!(method = %request.method, endpoint = %endpoint, "issuing request");

        let mut builder = self.http.request(request.method, url);
        builder = self.credential.apply(builder);
        builder = builder.header(ACCEPT, "application/json");
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = builder.send().await.map_err(|source| ApiError::Transport {
            endpoint: endpoint.clone(),
            source,
            response: None,
        })?;
        let status = response.status();

        // A body read can fail after the status line arrived; keep what
        // we have so the caller still sees status and endpoint.
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(source) => {
                return Err(ApiError::Transport {
                    endpoint: endpoint.clone(),
                    source,
                    response: Some(Box::new(ApiResponse {
                        status: status.as_u16(),
                        endpoint,
                        body: Vec::new(),
                    })),
                });
            }
        };

        let envelope = ApiResponse {
            status: status.as_u16(),
            endpoint: endpoint.clone(),
            body,
        };

        if status.is_success() {
            debug!(status = status.as_u16(), endpoint = %endpoint, "request succeeded");
            Ok(envelope)
        } else {
            warn!(status = status.as_u16(), endpoint = %endpoint, "request failed");
            Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint,
                response: Box::new(envelope),
            })
        }
    }
}

#[cfg(test)]
pub mod mocks {
    //! Mock transport for testing.

    use std::sync::Arc;
    use tokio::sync::Mutex;

    use super::*;

    /// Mock transport that replays pre-configured envelopes and records
    /// every request it receives.
    #[derive(Default)]
    pub struct MockTransport {
        /// Queue of responses, consumed front to back.
        pub responses: Arc<Mutex<Vec<Result<ApiResponse, ApiError>>>>,
        /// Requests received, in call order.
        pub requests: Arc<Mutex<Vec<ApiRequest>>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queues a response for the next call.
        pub async fn push_response(&self, response: Result<ApiResponse, ApiError>) {
            self.responses.lock().await.push(response);
        }

        /// Returns a copy of the recorded requests.
        pub async fn recorded(&self) -> Vec<ApiRequest> {
            self.requests.lock().await.clone()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
            self.requests.lock().await.push(request);
            let mut responses = self.responses.lock().await;
            if responses.is_empty() {
                panic!("no mock response configured");
            }
            responses.remove(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_transport() -> HttpTransport {
        HttpTransport::new(
            "https://example.atlassian.net",
            BasicCredential::from_parts("dev@example.com".to_string(), "token".to_string()),
        )
        .unwrap()
    }

    /// # Request Constructors
    ///
    /// Tests the ApiRequest convenience constructors.
    ///
    /// ## Test Scenario
    /// - Builds GET, POST, and DELETE requests
    ///
    /// ## Expected Outcome
    /// - Methods and bodies are set as expected
    #[test]
    fn test_api_request_constructors() {
        let get = ApiRequest::get("rest/api/3/field");
        assert_eq!(get.method, Method::GET);
        assert!(get.body.is_none());

        let post = ApiRequest::post("rest/api/3/field", b"{}".to_vec());
        assert_eq!(post.method, Method::POST);
        assert_eq!(post.body.as_deref(), Some(b"{}".as_slice()));

        let delete = ApiRequest::delete("rest/api/3/field/customfield_10000");
        assert_eq!(delete.method, Method::DELETE);
        assert!(delete.body.is_none());
    }

    /// # Endpoint Resolution
    ///
    /// Tests joining endpoint paths onto the site base URL.
    ///
    /// ## Test Scenario
    /// - Resolves endpoints against hosts with and without a context path
    ///
    /// ## Expected Outcome
    /// - Paths append to the base without clobbering existing segments
    #[test]
    fn test_endpoint_resolution() {
        let transport = test_transport();
        let url = transport.resolve("rest/api/3/field").unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.atlassian.net/rest/api/3/field"
        );

        let transport = HttpTransport::new(
            "https://example.com/jira",
            BasicCredential::from_parts("dev@example.com".to_string(), "token".to_string()),
        )
        .unwrap();
        let url = transport.resolve("rest/api/2/field/search?startAt=0").unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/jira/rest/api/2/field/search?startAt=0"
        );
    }

    /// # Invalid Host Rejected
    ///
    /// Tests that transport construction validates the host.
    ///
    /// ## Test Scenario
    /// - Creates a transport with a schemeless host
    ///
    /// ## Expected Outcome
    /// - InvalidValue is returned before any request can be made
    #[test]
    fn test_invalid_host_rejected() {
        let result = HttpTransport::new(
            "example.atlassian.net",
            BasicCredential::from_parts("dev@example.com".to_string(), "token".to_string()),
        );
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "host"
        ));
    }

    /// # Mock Replay and Recording
    ///
    /// Tests the mock transport used across the operation tests.
    ///
    /// ## Test Scenario
    /// - Queues an envelope, executes a request, inspects the recording
    ///
    /// ## Expected Outcome
    /// - The queued envelope is returned and the request is recorded
    #[tokio::test]
    async fn test_mock_transport_replay() {
        let mock = mocks::MockTransport::new();
        mock.push_response(Ok(ApiResponse {
            status: 200,
            endpoint: "https://example.atlassian.net/rest/api/3/field".to_string(),
            body: b"[]".to_vec(),
        }))
        .await;

        let envelope = mock
            .execute(ApiRequest::get("rest/api/3/field"))
            .await
            .unwrap();
        assert_eq!(envelope.status, 200);

        let recorded = mock.recorded().await;
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].endpoint, "rest/api/3/field");
    }
}
