//! Issue field operations.
//!
//! [`FieldOperations`] is the public face of the client: list, create,
//! search, and delete. [`FieldService`] implements it by delegating every
//! operation to the shared [`Transport`] with the operation's path, verb,
//! and payload shape, then decoding the body into the typed model.
//!
//! Every successful operation returns the typed output together with the
//! [`ApiResponse`] envelope; every failure carries the envelope inside
//! the error whenever one exists.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::form_urlencoded;

use super::transport::{ApiRequest, Transport};
use crate::error::ApiError;
use crate::models::{
    ApiResponse, CustomFieldPayload, Field, FieldSearchOptions, FieldSearchPage, Task,
};

/// The four operations of the issue field API.
///
/// The trait exists so callers can substitute their own implementation
/// (a recording stub, a caching layer) without touching the call sites.
#[async_trait]
pub trait FieldOperations: Send + Sync {
    /// Returns every field visible to the authenticated user, system and
    /// custom.
    ///
    /// `GET rest/api/{version}/field`
    async fn list(&self) -> Result<(Vec<Field>, ApiResponse), ApiError>;

    /// Creates a custom field from the given definition.
    ///
    /// `POST rest/api/{version}/field`
    async fn create(
        &self,
        payload: &CustomFieldPayload,
    ) -> Result<(Field, ApiResponse), ApiError>;

    /// Returns a page of fields matching the given criteria.
    ///
    /// `GET rest/api/{version}/field/search`
    ///
    /// Only non-empty criteria appear in the query string; list-valued
    /// criteria are comma-joined.
    async fn search(
        &self,
        options: Option<&FieldSearchOptions>,
        start_at: u32,
        max_results: u32,
    ) -> Result<(FieldSearchPage, ApiResponse), ApiError>;

    /// Schedules deletion of a custom field and returns the background
    /// task tracking it.
    ///
    /// `DELETE rest/api/{version}/field/{fieldId}`
    async fn delete(&self, field_id: &str) -> Result<(Task, ApiResponse), ApiError>;
}

/// Field service bound to a transport and an API version.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use jira_fields::{BasicCredential, FieldOperations, FieldService, HttpTransport};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credential = BasicCredential::from_parts(
///     "dev@example.com".to_string(),
///     "api-token".to_string(),
/// );
/// let transport = HttpTransport::new("https://example.atlassian.net", credential)?;
/// let fields = FieldService::new(Arc::new(transport), "3")?;
///
/// let (all, response) = fields.list().await?;
/// println!("{} fields ({})", all.len(), response.status);
/// # Ok(())
/// # }
/// ```
pub struct FieldService {
    transport: Arc<dyn Transport>,
    version: String,
}

impl FieldService {
    /// Creates a service for the given API version.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NoVersion`] when the version string is empty.
    pub fn new(
        transport: Arc<dyn Transport>,
        version: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let version = version.into();
        if version.is_empty() {
            return Err(ApiError::NoVersion);
        }
        Ok(Self { transport, version })
    }

    /// Returns the API version token used in endpoint paths.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Executes a request and decodes the body into `T`.
    ///
    /// This is the pattern every operation shares: execute through the
    /// transport (which embeds the envelope in any failure it reports),
    /// then decode, folding decode failures into the transport error
    /// category with the envelope attached.
    async fn call<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<(T, ApiResponse), ApiError> {
        let response = self.transport.execute(request).await?;
        match serde_json::from_slice(&response.body) {
            Ok(value) => Ok((value, response)),
            Err(source) => Err(ApiError::DecodeBody {
                endpoint: response.endpoint.clone(),
                source,
                response: Box::new(response),
            }),
        }
    }
}

/// Builds the search endpoint with only the non-empty criteria.
fn search_endpoint(
    version: &str,
    options: Option<&FieldSearchOptions>,
    start_at: u32,
    max_results: u32,
) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());
    params.append_pair("startAt", &start_at.to_string());
    params.append_pair("maxResults", &max_results.to_string());

    if let Some(options) = options {
        if !options.expand.is_empty() {
            params.append_pair("expand", &options.expand.join(","));
        }
        if !options.types.is_empty() {
            params.append_pair("type", &options.types.join(","));
        }
        if !options.ids.is_empty() {
            params.append_pair("id", &options.ids.join(","));
        }
        if let Some(order_by) = options.order_by.as_deref().filter(|s| !s.is_empty()) {
            params.append_pair("orderBy", order_by);
        }
        if let Some(query) = options.query.as_deref().filter(|s| !s.is_empty()) {
            params.append_pair("query", query);
        }
    }

    format!("rest/api/{version}/field/search?{}", params.finish())
}

#[async_trait]
impl FieldOperations for FieldService {
    async fn list(&self) -> Result<(Vec<Field>, ApiResponse), ApiError> {
        let endpoint = format!("rest/api/{}/field", self.version);
        self.call(ApiRequest::get(endpoint)).await
    }

    async fn create(
        &self,
        payload: &CustomFieldPayload,
    ) -> Result<(Field, ApiResponse), ApiError> {
        let body =
            serde_json::to_vec(payload).map_err(|source| ApiError::EncodePayload { source })?;
        let endpoint = format!("rest/api/{}/field", self.version);
        self.call(ApiRequest::post(endpoint, body)).await
    }

    async fn search(
        &self,
        options: Option<&FieldSearchOptions>,
        start_at: u32,
        max_results: u32,
    ) -> Result<(FieldSearchPage, ApiResponse), ApiError> {
        let endpoint = search_endpoint(&self.version, options, start_at, max_results);
        self.call(ApiRequest::get(endpoint)).await
    }

    async fn delete(&self, field_id: &str) -> Result<(Task, ApiResponse), ApiError> {
        if field_id.is_empty() {
            return Err(ApiError::NoFieldId);
        }
        let endpoint = format!("rest/api/{}/field/{}", self.version, field_id);
        self.call(ApiRequest::delete(endpoint)).await
    }
}
