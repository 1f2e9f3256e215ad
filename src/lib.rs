//! # jira-fields
//!
//! A typed async client for the Jira issue field REST API. This library
//! provides:
//!
//! - Listing, creating, searching, and deleting issue fields
//! - A transport abstraction preserving the raw HTTP response alongside
//!   every typed result
//! - Environment-based configuration and basic-auth credential handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use jira_fields::{Config, FieldOperations, FieldService, HttpTransport};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Resolve JIRA_HOST / JIRA_MAIL / JIRA_TOKEN from the environment
//! let config = Config::from_env()?;
//! let transport = HttpTransport::from_config(&config)?;
//! let fields = FieldService::new(Arc::new(transport), &config.api_version)?;
//!
//! let (all, response) = fields.list().await?;
//! println!("Found {} fields (HTTP {})", all.len(), response.status);
//! # Ok(())
//! # }
//! ```
//!
//! ## Cancellation
//!
//! Calls follow tokio's cancellation model: dropping a call's future
//! (for example through `tokio::select!` or `tokio::time::timeout`)
//! aborts the round trip promptly. The client performs no retries and
//! sets no timeouts of its own.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;

// Re-export commonly used types for convenience
pub use api::{ApiRequest, BasicCredential, FieldOperations, FieldService, HttpTransport, Transport};
pub use config::Config;
pub use error::{ApiError, ConfigError, JiraFieldsError};
pub use models::{
    ApiResponse, CustomFieldPayload, Field, FieldSearchOptions, FieldSearchPage, Task,
};

/// Core result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
