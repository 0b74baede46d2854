use std::sync::Arc;

use secrecy::SecretString;
use serde_json::{Value, json};
use tracing::{debug, info, instrument, warn};
use wall_updater_sdk::{CallContextAccessor, WallUpdate, WallUpdateAck};

use super::credentials::{TokenSource, resolve_token};
use super::error::DomainError;
use super::ports::{WallApiResponse, WallApiTransport};
use super::sanitize::sanitize_update;
use crate::config::WallUpdaterConfig;

/// Longest slice of an error body carried into the error detail.
const MAX_ERROR_BODY_CHARS: usize = 512;

// ============================================================================
// Service Implementation
// ============================================================================

/// Applies partial updates to walls through a [`WallApiTransport`].
pub struct WallUpdateService<T: WallApiTransport> {
    transport: Arc<T>,
    config: WallUpdaterConfig,
}

impl<T: WallApiTransport> WallUpdateService<T> {
    #[must_use]
    pub fn new(transport: Arc<T>, config: WallUpdaterConfig) -> Self {
        Self { transport, config }
    }

    /// Resolve the caller's credential, then send `update` to wall `wall_id`.
    ///
    /// # Errors
    /// [`DomainError::MissingCredential`] when no token is available, otherwise
    /// whatever [`execute`](Self::execute) returns.
    #[instrument(skip(self, ctx, update))]
    pub async fn update_wall(
        &self,
        ctx: &dyn CallContextAccessor,
        wall_id: i64,
        update: &WallUpdate,
    ) -> Result<WallUpdateAck, DomainError> {
        let (token, source) = resolve_token(ctx, &self.config)?;
        self.execute(&token, source, wall_id, update).await
    }

    /// Send one update with an already resolved token.
    ///
    /// The base URL is checked before anything goes on the wire. There is no
    /// retry on any path.
    ///
    /// # Errors
    /// - [`DomainError::Validation`] if map-location enforcement is on and a new post lacks a location
    /// - [`DomainError::Config`] if no base URL is configured
    /// - [`DomainError::Transport`] if the request does not complete
    /// - the classification errors of [`classify_response`]
    pub async fn execute(
        &self,
        token: &SecretString,
        source: TokenSource,
        wall_id: i64,
        update: &WallUpdate,
    ) -> Result<WallUpdateAck, DomainError> {
        self.check_map_locations(update)?;

        let payload = sanitize_update(update)?;
        if self.config.is_development() {
            info!(wall_id, payload = %payload, "Sanitized wall update");
        }

        let base_url = self.config.base_url().ok_or_else(|| {
            DomainError::config("missing base URL: RAILS_INTERNAL_URL is not set")
        })?;
        let url = build_update_url(base_url, wall_id);
        let body = json!({ "tool_uses": payload });

        debug!(wall_id, token_source = source.as_str(), "Sending wall update");
        let response = self.transport.post_json(&url, token, &body).await?;

        classify_response(&response).inspect_err(|e| {
            warn!(wall_id, status = response.status, error = %e, "Wall update failed");
        })?;

        info!(wall_id, "Wall update applied");
        Ok(WallUpdateAck::succeeded(wall_id))
    }

    fn check_map_locations(&self, update: &WallUpdate) -> Result<(), DomainError> {
        if !self.config.enforce_map_locations {
            return Ok(());
        }
        let missing = update.posts_missing_location();
        if missing.is_empty() {
            return Ok(());
        }
        Err(DomainError::validation(format!(
            "location_data is required for new posts on a map wall: {}",
            missing.join(", ")
        )))
    }
}

/// `{base}/api/1/walls/{wall_id}/ai-chat`, tolerating a trailing slash on `base`.
#[must_use]
pub fn build_update_url(base_url: &str, wall_id: i64) -> String {
    let base = base_url.trim_end_matches('/');
    format!("{base}/api/1/walls/{wall_id}/ai-chat")
}

/// Decide whether the wall service accepted the update.
///
/// Only an explicit `data.attributes.success == false` is a rejection; a
/// missing flag on a 200 JSON response counts as success.
///
/// # Errors
/// [`DomainError::NonSuccessStatus`], [`DomainError::InvalidResponseBody`] or
/// [`DomainError::Rejected`].
pub fn classify_response(response: &WallApiResponse) -> Result<(), DomainError> {
    if response.status != 200 {
        let body: String = String::from_utf8_lossy(&response.body)
            .chars()
            .take(MAX_ERROR_BODY_CHARS)
            .collect();
        return Err(DomainError::NonSuccessStatus {
            status: response.status,
            body,
        });
    }

    let parsed: Value = serde_json::from_slice(&response.body)
        .map_err(|e| DomainError::InvalidResponseBody(e.to_string()))?;

    if parsed.pointer("/data/attributes/success") == Some(&Value::Bool(false)) {
        return Err(DomainError::Rejected);
    }
    Ok(())
}
