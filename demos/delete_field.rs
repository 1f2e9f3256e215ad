//! Deletes a custom field and reports the background task Jira starts.
//!
//! Reads `JIRA_HOST`, `JIRA_MAIL`, `JIRA_TOKEN`, and `JIRA_FIELD_ID`
//! from the environment.

use std::sync::Arc;

use anyhow::Result;
use jira_fields::logging::{LogConfig, init_logging};
use jira_fields::{Config, FieldOperations, FieldService, HttpTransport};

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = init_logging(LogConfig::from_env());

    let config = Config::from_env()?;
    let transport = HttpTransport::from_config(&config)?;
    let fields = FieldService::new(Arc::new(transport), &config.api_version)?;

    // An unset variable maps to "" and fails the precondition check
    // before any request goes out.
    let field_id = std::env::var("JIRA_FIELD_ID").unwrap_or_default();

    match fields.delete(&field_id).await {
        Ok((task, response)) => {
            println!("HTTP {} from {}", response.status, response.endpoint);
            println!(
                "deletion task {} is {} ({}% complete)",
                task.id.as_deref().unwrap_or("-"),
                task.status.as_deref().unwrap_or("-"),
                task.progress,
            );
            Ok(())
        }
        Err(err) => {
            if let Some(response) = err.response() {
                eprintln!("raw response body: {}", response.body_as_text());
            }
            Err(err.into())
        }
    }
}
