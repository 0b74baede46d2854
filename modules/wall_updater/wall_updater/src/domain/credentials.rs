//! Per-call credential resolution.

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use wall_updater_sdk::{CallContextAccessor, PADLET_TOKEN_KEY};

use super::error::DomainError;
use crate::config::WallUpdaterConfig;

/// Where a resolved token came from. Logged instead of the token itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Configurable,
    Context,
    Fallback,
}

impl TokenSource {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Configurable => "configurable",
            Self::Context => "context",
            Self::Fallback => "fallback",
        }
    }
}

/// A non-empty string or a number is a token. Anything else is "not here".
fn token_from(value: Option<&Value>) -> Option<SecretString> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(SecretString::from(s.clone())),
        Value::Number(n) => Some(SecretString::from(n.to_string())),
        _ => None,
    }
}

/// Resolve the bearer token for one call.
///
/// First match wins: `configurable.padlet_token`, then `context.padlet_token`,
/// then the configured fallback token. Nothing is cached between calls.
///
/// # Errors
/// Returns [`DomainError::MissingCredential`] when no source holds a token.
pub fn resolve_token(
    ctx: &dyn CallContextAccessor,
    config: &WallUpdaterConfig,
) -> Result<(SecretString, TokenSource), DomainError> {
    if let Some(token) = token_from(ctx.configurable(PADLET_TOKEN_KEY)) {
        return Ok((token, TokenSource::Configurable));
    }
    if let Some(token) = token_from(ctx.context(PADLET_TOKEN_KEY)) {
        return Ok((token, TokenSource::Context));
    }
    if let Some(token) = &config.padlet_ai_token {
        let token = SecretString::from(token.expose_secret().to_owned());
        return Ok((token, TokenSource::Fallback));
    }

    if config.is_development() {
        tracing::warn!(
            key = PADLET_TOKEN_KEY,
            "No wall service token in call context; expected at config.configurable.padlet_token or context.padlet_token"
        );
    }
    Err(DomainError::MissingCredential)
}
