//! `WallUpdaterClientV1` trait definition.
//!
//! Every update call takes the runtime's call context explicitly; the
//! credential for the call is resolved from it.

use async_trait::async_trait;

use crate::context::CallContextAccessor;
use crate::error::WallUpdaterError;
use crate::models::{WallUpdate, WallUpdateAck};

/// Public API of the wall updater (Version 1).
///
/// ```ignore
/// let ack = client.update_wall(&ctx, 42, update).await?;
/// assert!(ack.success);
/// ```
#[async_trait]
pub trait WallUpdaterClientV1: Send + Sync {
    /// Apply a partial update to a wall.
    ///
    /// Resolves the credential from `ctx`, strips absent fields and sends a
    /// single request to the wall service. Never retries.
    async fn update_wall(
        &self,
        ctx: &dyn CallContextAccessor,
        wall_id: i64,
        update: WallUpdate,
    ) -> Result<WallUpdateAck, WallUpdaterError>;

    /// Same as [`update_wall`](Self::update_wall), starting from raw
    /// `update_padlet` tool-call arguments (`{"wall_id": .., "wall_data": ..}`).
    ///
    /// Malformed arguments fail with [`WallUpdaterError::Validation`] before
    /// the credential is looked up.
    async fn update_wall_from_args(
        &self,
        ctx: &dyn CallContextAccessor,
        args: serde_json::Value,
    ) -> Result<WallUpdateAck, WallUpdaterError>;

    /// Look up help content for a feature question.
    async fn search_helpdocs(&self, query: &str) -> String;
}
