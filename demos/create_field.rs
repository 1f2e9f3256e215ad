//! Creates a custom text field.
//!
//! Reads `JIRA_HOST`, `JIRA_MAIL`, and `JIRA_TOKEN` from the environment.

use std::sync::Arc;

use anyhow::Result;
use jira_fields::logging::{LogConfig, init_logging};
use jira_fields::{Config, CustomFieldPayload, FieldOperations, FieldService, HttpTransport};

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = init_logging(LogConfig::from_env());

    let config = Config::from_env()?;
    let transport = HttpTransport::from_config(&config)?;
    let fields = FieldService::new(Arc::new(transport), &config.api_version)?;

    let payload = CustomFieldPayload {
        name: "Escalation Contact".to_string(),
        description: Some("Who to page when this issue escalates".to_string()),
        field_type: "com.atlassian.jira.plugin.system.customfieldtypes:textfield".to_string(),
        searcher_key: Some(
            "com.atlassian.jira.plugin.system.customfieldtypes:textsearcher".to_string(),
        ),
    };

    match fields.create(&payload).await {
        Ok((created, response)) => {
            println!("HTTP {} from {}", response.status, response.endpoint);
            println!(
                "created {} ({})",
                created.name.as_deref().unwrap_or("-"),
                created.id.as_deref().unwrap_or("-"),
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
