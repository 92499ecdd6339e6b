use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

/// Source of the bearer token attached to every request.
///
/// The client asks for a token on each call and never caches or refreshes
/// it; implementations that talk to a UAA own their refresh policy.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Return the raw access token (without the `bearer ` prefix).
    async fn token(&self) -> Result<SecretString, Error>;
}

/// A token fixed at construction time.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: SecretString,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
        }
    }

    pub fn from_secret(token: SecretString) -> Self {
        Self { token }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn token(&self) -> Result<SecretString, Error> {
        if self.token.expose_secret().is_empty() {
            return Err(Error::Token {
                message: "static token is empty".into(),
            });
        }
        Ok(self.token.clone())
    }
}

/// Build the `Authorization` header value for a token.
///
/// Accepts tokens that already carry a `bearer ` prefix, as `cf oauth-token`
/// prints them.
pub(crate) fn authorization_value(
    token: &SecretString,
) -> Result<reqwest::header::HeaderValue, Error> {
    let raw = token.expose_secret().trim();
    let bare = raw
        .strip_prefix("bearer ")
        .or_else(|| raw.strip_prefix("Bearer "))
        .unwrap_or(raw);

    let mut value = reqwest::header::HeaderValue::from_str(&format!("bearer {bare}"))
        .map_err(|e| Error::Token {
            message: format!("invalid token header value: {e}"),
        })?;
    value.set_sensitive(true);
    Ok(value)
}
