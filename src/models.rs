//! Wire models for the Jira issue field API.
//!
//! These structures mirror the JSON bodies exchanged with Jira's
//! `rest/api/{version}/field` endpoints. They are plain serde targets:
//! constructed per call, never cached, never mutated after a call
//! completes.

use serde::{Deserialize, Serialize};

/// Metadata wrapper returned alongside every call's typed result.
///
/// The envelope is also embedded in transport-category errors so callers
/// can inspect the raw body Jira sent back (error payloads frequently
/// carry a JSON problem description that is worth logging verbatim).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code of the response.
    pub status: u16,
    /// Absolute URL the request was issued against.
    pub endpoint: String,
    /// Raw response body bytes, unparsed.
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Returns the raw body decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn body_as_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// A named, typed attribute definable on Jira issues.
///
/// Returned by the list, create, and search operations. Search results
/// additionally populate the description, lock flag, searcher key, and
/// usage counters when the matching `expand` values are requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Field {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub custom: bool,
    pub orderable: bool,
    pub navigable: bool,
    pub searchable: bool,
    /// JQL clause names that reference this field.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clause_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<FieldScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<FieldSchema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searcher_key: Option<String>,
    pub screens_count: u64,
    pub contexts_count: u64,
    pub projects_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_used: Option<FieldLastUsed>,
}

/// Restricts which projects a field applies to.
///
/// `scope_type` is `GLOBAL` or `PROJECT`; the project reference is only
/// present for project-scoped fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldScope {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scope_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ScopeProject>,
}

/// Project reference carried inside a field scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeProject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Data type description of a field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldSchema {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    /// Item type when `schema_type` is `array`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<String>,
    /// System field key for built-in fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Custom field module key for custom fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<u64>,
}

/// Most recent usage record of a field, returned by search with
/// `expand=lastUsed`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldLastUsed {
    /// `TRACKED`, `NOT_TRACKED`, or `NO_INFORMATION`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub usage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Request body for creating a custom field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Custom field module key, e.g.
    /// `com.atlassian.jira.plugin.system.customfieldtypes:textfield`.
    #[serde(rename = "type")]
    pub field_type: String,
    /// Searcher module key; must be compatible with `field_type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searcher_key: Option<String>,
}

/// Optional criteria for the field search operation.
///
/// Empty collections and `None` values are omitted from the query string
/// entirely; list-valued criteria are comma-joined into a single
/// parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSearchOptions {
    /// Additional attributes to include in the results, e.g.
    /// `searcherKey`, `screensCount`, `lastUsed`.
    pub expand: Vec<String>,
    /// Field type filters: `custom`, `system`.
    pub types: Vec<String>,
    /// Field ID filters.
    pub ids: Vec<String>,
    /// Sort order, e.g. `name` or `-lastUsed`.
    pub order_by: Option<String>,
    /// Free-text match against field names and descriptions.
    pub query: Option<String>,
}

/// One page of field search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldSearchPage {
    pub max_results: u32,
    pub start_at: u32,
    pub total: u32,
    pub is_last: bool,
    pub values: Vec<Field>,
}

/// Handle for an operation Jira processes in the background.
///
/// Field deletion returns one of these; callers poll the `self_url` to
/// observe completion. Timestamps are epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Task {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `ENQUEUED`, `RUNNING`, `COMPLETE`, `FAILED`, `CANCELLED`,
    /// `CANCEL_REQUESTED`, or `DEAD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    pub submitted_by: i64,
    /// Completion percentage, 0-100.
    pub progress: i64,
    pub elapsed_runtime: i64,
    pub submitted: i64,
    pub started: i64,
    pub finished: i64,
    pub last_update: i64,
}
