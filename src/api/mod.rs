//! Jira API client module.
//!
//! This module provides the client for the Jira issue field REST API:
//! a transport abstraction over a shared HTTP client and a field service
//! exposing the domain operations.
//!
//! ## Features
//!
//! - Listing system and custom fields
//! - Creating custom fields
//! - Searching fields with pagination and filter criteria
//! - Deleting custom fields with background task tracking
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use jira_fields::{BasicCredential, FieldOperations, FieldService, HttpTransport};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let credential = BasicCredential::from_parts(
//!     "dev@example.com".to_string(),
//!     "api-token".to_string(),
//! );
//! let transport = HttpTransport::new("https://example.atlassian.net", credential)?;
//! let fields = FieldService::new(Arc::new(transport), "3")?;
//!
//! let (all, _response) = fields.list().await?;
//! println!("Found {} fields", all.len());
//! # Ok(())
//! # }
//! ```

mod credential;
mod fields;
mod transport;

// Re-export the client surface
pub use credential::BasicCredential;
pub use fields::{FieldOperations, FieldService};
pub use transport::{ApiRequest, HttpTransport, Transport};
