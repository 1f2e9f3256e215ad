//! Unified error handling for the jira-fields library.
//!
//! This module provides the error hierarchy using `thiserror` for
//! programmatic error handling and informative error messages.
//!
//! ## Error Categories
//!
//! - [`ApiError`]: Errors from Jira API interactions, including the
//!   response envelope whenever one is available
//! - [`ConfigError`]: Errors from configuration resolution
//!
//! ## Example
//!
//! ```rust,no_run
//! use jira_fields::error::{ApiError, JiraFieldsError};
//!
//! fn example() -> Result<(), JiraFieldsError> {
//!     // Errors are automatically converted via From trait
//!     Err(ApiError::NoFieldId)?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::models::ApiResponse;

/// The main error type for the jira-fields library.
#[derive(Error, Debug)]
pub enum JiraFieldsError {
    /// An error occurred while interacting with the Jira API.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// An error occurred while resolving configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A generic error for cases not covered by specific error types.
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Errors that can occur when interacting with the Jira API.
///
/// Transport-category variants embed the [`ApiResponse`] envelope when one
/// exists so callers can log the raw body Jira returned; use
/// [`ApiError::response`] to reach it uniformly.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A field identifier was required but empty. Raised before any
    /// network activity.
    #[error("field id is required")]
    NoFieldId,

    /// The service was constructed with an empty API version.
    #[error("API version is required")]
    NoVersion,

    /// The request payload could not be encoded as JSON.
    #[error("failed to encode request payload: {source}")]
    EncodePayload {
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// An endpoint path could not be resolved against the base URL.
    #[error("invalid endpoint '{endpoint}': {message}")]
    InvalidEndpoint {
        /// The endpoint path that failed to resolve.
        endpoint: String,
        /// Description of the resolution failure.
        message: String,
    },

    /// The request failed at the network layer.
    ///
    /// The envelope is present when the failure happened after the status
    /// line was received (e.g. the body read was cut short); its body is
    /// whatever could be salvaged.
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        /// Absolute URL of the failed request.
        endpoint: String,
        /// The underlying client error.
        #[source]
        source: reqwest::Error,
        /// Partially populated envelope, when available.
        response: Option<Box<ApiResponse>>,
    },

    /// The API answered with a non-success status.
    #[error("unexpected status {status} from {endpoint}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Absolute URL of the request.
        endpoint: String,
        /// The full envelope, including the raw error body.
        response: Box<ApiResponse>,
    },

    /// The response body could not be decoded into the expected type.
    #[error("failed to decode response from {endpoint}: {source}")]
    DecodeBody {
        /// Absolute URL of the request.
        endpoint: String,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
        /// The full envelope, including the undecodable body.
        response: Box<ApiResponse>,
    },
}

impl ApiError {
    /// Returns the response envelope embedded in this error, if any.
    ///
    /// Precondition and serialization errors never carry one; they are
    /// raised before any network activity.
    #[must_use]
    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            Self::NoFieldId
            | Self::NoVersion
            | Self::EncodePayload { .. }
            | Self::InvalidEndpoint { .. } => None,
            Self::Transport { response, .. } => response.as_deref(),
            Self::UnexpectedStatus { response, .. } | Self::DecodeBody { response, .. } => {
                Some(response)
            }
        }
    }
}

/// Errors that can occur during configuration resolution.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required configuration value is missing.
    #[error("{field} is required (set the {env_var} environment variable)")]
    MissingRequired {
        /// Name of the missing field.
        field: String,
        /// Environment variable that supplies this field.
        env_var: String,
    },

    /// An invalid value was provided for a configuration field.
    #[error("invalid value for {field}: {message}")]
    InvalidValue {
        /// Name of the field with the invalid value.
        field: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Type alias for Results using JiraFieldsError.
///
/// Note: This is not re-exported from the crate root to avoid shadowing
/// `anyhow::Result`. Use explicitly as `error::Result<T>` when needed.
pub type JiraFieldsResult<T> = std::result::Result<T, JiraFieldsError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_envelope() -> ApiResponse {
        ApiResponse {
            status: 404,
            endpoint: "https://example.atlassian.net/rest/api/3/field/x".to_string(),
            body: br#"{"errorMessages":["The field was not found."]}"#.to_vec(),
        }
    }

    /// # API Error Display
    ///
    /// Tests that API errors display correctly formatted messages.
    ///
    /// ## Test Scenario
    /// - Creates various ApiError variants
    /// - Tests their Display implementation
    ///
    /// ## Expected Outcome
    /// - Each error variant produces a clear, informative message
    #[test]
    fn test_api_error_display() {
        assert!(ApiError::NoFieldId.to_string().contains("field id"));
        assert!(ApiError::NoVersion.to_string().contains("version"));

        let status = ApiError::UnexpectedStatus {
            status: 404,
            endpoint: "https://example.atlassian.net/rest/api/3/field/x".to_string(),
            response: Box::new(sample_envelope()),
        };
        assert!(status.to_string().contains("404"));
        assert!(status.to_string().contains("field/x"));

        let encode = ApiError::EncodePayload {
            source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        };
        assert!(encode.to_string().contains("encode"));
    }

    /// # Envelope Accessor
    ///
    /// Tests that the embedded envelope is reachable uniformly.
    ///
    /// ## Test Scenario
    /// - Queries `response()` on precondition and transport-category
    ///   errors
    ///
    /// ## Expected Outcome
    /// - Precondition errors carry no envelope
    /// - Status and decode errors expose the envelope with its raw body
    #[test]
    fn test_response_accessor() {
        assert!(ApiError::NoFieldId.response().is_none());
        assert!(ApiError::NoVersion.response().is_none());

        let status = ApiError::UnexpectedStatus {
            status: 404,
            endpoint: sample_envelope().endpoint,
            response: Box::new(sample_envelope()),
        };
        let envelope = status.response().unwrap();
        assert_eq!(envelope.status, 404);
        assert!(envelope.body_as_text().contains("not found"));

        let decode = ApiError::DecodeBody {
            endpoint: sample_envelope().endpoint,
            source: serde_json::from_slice::<serde_json::Value>(b"not json").unwrap_err(),
            response: Box::new(sample_envelope()),
        };
        assert!(decode.response().is_some());
    }

    /// # Config Error Display
    ///
    /// Tests that config errors name the environment variable to set.
    ///
    /// ## Test Scenario
    /// - Creates MissingRequired and InvalidValue variants
    ///
    /// ## Expected Outcome
    /// - Messages contain the field name and the env var hint
    #[test]
    fn test_config_error_display() {
        let missing = ConfigError::MissingRequired {
            field: "host".to_string(),
            env_var: "JIRA_HOST".to_string(),
        };
        let msg = missing.to_string();
        assert!(msg.contains("host"));
        assert!(msg.contains("JIRA_HOST"));

        let invalid = ConfigError::InvalidValue {
            field: "host".to_string(),
            message: "relative URL without a base".to_string(),
        };
        assert!(invalid.to_string().contains("relative URL"));
    }

    /// # Error Conversion
    ///
    /// Tests that errors convert correctly through the From trait.
    ///
    /// ## Test Scenario
    /// - Converts specific error types to JiraFieldsError
    ///
    /// ## Expected Outcome
    /// - All error types convert seamlessly to JiraFieldsError
    #[test]
    fn test_error_conversion() {
        let api_error = ApiError::NoFieldId;
        let error: JiraFieldsError = api_error.into();
        assert!(matches!(error, JiraFieldsError::Api(_)));

        let config_error = ConfigError::MissingRequired {
            field: "token".to_string(),
            env_var: "JIRA_TOKEN".to_string(),
        };
        let error: JiraFieldsError = config_error.into();
        assert!(matches!(error, JiraFieldsError::Config(_)));
    }
}
