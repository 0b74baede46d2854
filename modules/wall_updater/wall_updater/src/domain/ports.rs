use async_trait::async_trait;
use bytes::Bytes;
use secrecy::SecretString;
use serde_json::Value;

use super::error::DomainError;

/// Raw answer from the wall service. Interpretation is up to the service layer.
#[derive(Debug, Clone)]
pub struct WallApiResponse {
    pub status: u16,
    pub body: Bytes,
}

/// Outbound port to the wall service.
///
/// One call, one request. Implementations map connection, timeout and
/// body-read problems to [`DomainError::Transport`] and never retry.
#[async_trait]
pub trait WallApiTransport: Send + Sync {
    /// POST `body` as JSON to `url` with `Authorization: Bearer <token>`.
    ///
    /// # Errors
    /// [`DomainError::Transport`] when no response is received.
    async fn post_json(
        &self,
        url: &str,
        token: &SecretString,
        body: &Value,
    ) -> Result<WallApiResponse, DomainError>;
}
