//! reqwest-backed transport to the Rails wall service.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{Instrument, info_span, instrument};

use crate::domain::error::DomainError;
use crate::domain::ports::{WallApiResponse, WallApiTransport};

/// HTTP transport for wall updates.
pub struct RailsWallClient {
    client: reqwest::Client,
}

impl RailsWallClient {
    /// Create a client whose requests give up after `timeout`.
    ///
    /// # Errors
    /// Returns [`DomainError::Config`] if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::config(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

fn map_send_error(e: &reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::transport(format!("request timed out: {e}"))
    } else if e.is_connect() {
        DomainError::transport(format!("connection error: {e}"))
    } else {
        DomainError::transport(format!("request error: {e}"))
    }
}

#[async_trait]
impl WallApiTransport for RailsWallClient {
    #[instrument(skip(self, token, body))]
    async fn post_json(
        &self,
        url: &str,
        token: &SecretString,
        body: &Value,
    ) -> Result<WallApiResponse, DomainError> {
        let start = Instant::now();

        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, format!("Bearer {}", token.expose_secret()))
            .json(body)
            .send()
            .instrument(info_span!("http_request"))
            .await
            .map_err(|e| map_send_error(&e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::transport(format!("failed to read response body: {e}")))?;

        // Duration in ms is always small enough for u64 in practice
        #[allow(clippy::cast_possible_truncation)]
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            status_code = status,
            duration_ms,
            body_size = body.len(),
            "Wall service request completed"
        );

        Ok(WallApiResponse { status, body })
    }
}
