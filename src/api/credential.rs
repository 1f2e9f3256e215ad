//! Basic-auth credential for the Jira API.
//!
//! Jira Cloud authenticates REST calls with basic auth: the account email
//! paired with an API token. The token is stored securely using
//! `SecretString` and only exposed at the moment the header is built.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Email/token credential pair for Jira basic authentication.
///
/// # Example
///
/// ```rust,no_run
/// use jira_fields::BasicCredential;
/// use secrecy::SecretString;
///
/// let token = SecretString::from("your-api-token".to_string());
/// let credential = BasicCredential::new("dev@example.com".to_string(), token);
/// ```
#[derive(Clone)]
pub struct BasicCredential {
    mail: String,
    token: SecretString,
}

impl BasicCredential {
    /// Creates a new credential from an email and a SecretString token.
    pub fn new(mail: String, token: SecretString) -> Self {
        Self { mail, token }
    }

    /// Creates a new credential from plain strings.
    ///
    /// The token will be wrapped in a SecretString for secure handling.
    pub fn from_parts(mail: String, token: String) -> Self {
        Self {
            mail,
            token: SecretString::from(token),
        }
    }

    /// Returns the account email.
    #[must_use]
    pub fn mail(&self) -> &str {
        &self.mail
    }

    /// Attaches the basic-auth header to a request under construction.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.mail, Some(self.token.expose_secret()))
    }
}

impl std::fmt::Debug for BasicCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredential")
            .field("mail", &self.mail)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
