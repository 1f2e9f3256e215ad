//! Searches custom fields page by page, ordered by name.
//!
//! Reads `JIRA_HOST`, `JIRA_MAIL`, and `JIRA_TOKEN` from the environment.

use std::sync::Arc;

use anyhow::Result;
use jira_fields::logging::{LogConfig, init_logging};
use jira_fields::{Config, FieldOperations, FieldSearchOptions, FieldService, HttpTransport};

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = init_logging(LogConfig::from_env());

    let config = Config::from_env()?;
    let transport = HttpTransport::from_config(&config)?;
    let fields = FieldService::new(Arc::new(transport), &config.api_version)?;

    let options = FieldSearchOptions {
        types: vec!["custom".to_string()],
        expand: vec!["searcherKey".to_string(), "screensCount".to_string()],
        order_by: Some("name".to_string()),
        ..Default::default()
    };

    let mut start_at = 0;
    loop {
        let (page, response) = match fields.search(Some(&options), start_at, 50).await {
            Ok(result) => result,
            Err(err) => {
                if let Some(response) = err.response() {
                    eprintln!("raw response body: {}", response.body_as_text());
                }
                return Err(err.into());
            }
        };

        println!(
            "HTTP {}: {} of {} fields (startAt={})",
            response.status,
            page.values.len(),
            page.total,
            page.start_at,
        );
        for field in &page.values {
            println!(
                "{}  {}  screens={}",
                field.id.as_deref().unwrap_or("-"),
                field.name.as_deref().unwrap_or("-"),
                field.screens_count,
            );
        }

        if page.is_last {
            break;
        }
        start_at += page.values.len() as u32;
    }

    Ok(())
}
