//! Configuration resolution for jira-fields.
//!
//! The client reads its connection settings from environment variables:
//!
//! - `JIRA_HOST` (required): base URL of the Jira site, e.g.
//!   `https://your-site.atlassian.net`
//! - `JIRA_MAIL` (required): account email for basic authentication
//! - `JIRA_TOKEN` (required): API token paired with the email
//! - `JIRA_API_VERSION` (optional): REST API version token, default `3`
//!
//! ## Example
//!
//! ```rust,no_run
//! use jira_fields::Config;
//!
//! let config = Config::from_env()?;
//! println!("Jira host: {}", config.host);
//! # Ok::<(), jira_fields::error::ConfigError>(())
//! ```

use secrecy::SecretString;
use url::Url;

use crate::error::ConfigError;

/// Default REST API version when `JIRA_API_VERSION` is not set.
pub const DEFAULT_API_VERSION: &str = "3";

/// Connection settings for a Jira site.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Jira site, normalized to end with a slash so
    /// endpoint paths join onto it without clobbering path segments.
    pub host: Url,
    /// Account email used for basic authentication.
    pub mail: String,
    /// API token paired with the email. Redacted in Debug output.
    pub token: SecretString,
    /// REST API version token interpolated into endpoint paths.
    pub api_version: String,
}

impl Config {
    /// Resolves the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] naming the environment
    /// variable when `JIRA_HOST`, `JIRA_MAIL`, or `JIRA_TOKEN` is absent
    /// or empty, and [`ConfigError::InvalidValue`] when the host is not a
    /// valid absolute URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = require_env("host", "JIRA_HOST")?;
        let mail = require_env("mail", "JIRA_MAIL")?;
        let token = require_env("token", "JIRA_TOKEN")?;
        let api_version = std::env::var("JIRA_API_VERSION")
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        Ok(Self {
            host: parse_host(&host)?,
            mail,
            token: SecretString::from(token),
            api_version,
        })
    }

    /// Builds a configuration from explicit values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the host is not a valid
    /// absolute URL.
    pub fn new(
        host: &str,
        mail: impl Into<String>,
        token: SecretString,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            host: parse_host(host)?,
            mail: mail.into(),
            token,
            api_version: DEFAULT_API_VERSION.to_string(),
        })
    }

    /// Replaces the API version token.
    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }
}

fn require_env(field: &str, env_var: &str) -> Result<String, ConfigError> {
    std::env::var(env_var)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingRequired {
            field: field.to_string(),
            env_var: env_var.to_string(),
        })
}

/// Parses the host into a URL whose path ends with a slash.
///
/// `Url::join` replaces the last path segment of a slashless base, so
/// `https://host/jira` joined with `rest/api/3/field` would drop `jira`.
pub(crate) fn parse_host(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw).map_err(|err| ConfigError::InvalidValue {
        field: "host".to_string(),
        message: err.to_string(),
    })?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
