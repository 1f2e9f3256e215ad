//! Lists every field visible to the authenticated user.
//!
//! Reads `JIRA_HOST`, `JIRA_MAIL`, and `JIRA_TOKEN` from the environment.

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

    match fields.list().await {
        Ok((all, response)) => {
            println!("HTTP {} from {}", response.status, response.endpoint);
            for field in &all {
                println!(
                    "{}  {}  custom={}",
                    field.id.as_deref().unwrap_or("-"),
                    field.name.as_deref().unwrap_or("-"),
                    field.custom,
                );
            }
            println!("{} fields total", all.len());
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
