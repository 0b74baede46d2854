//! Wall Updater
//!
//! Applies agent-authored partial updates to walls through the wall service
//! HTTP API. Implements `WallUpdaterClientV1` from the SDK.
//!
//! ## Pipeline
//!
//! 1. Resolve the bearer token from the call context (or the configured fallback)
//! 2. Strip null fields from the update
//! 3. `POST {RAILS_INTERNAL_URL}/api/1/walls/{id}/ai-chat` with `{"tool_uses": ...}`
//! 4. Classify the response; no retries
//!
//! ```ignore
//! let client = wall_updater::build_client(WallUpdaterConfig::from_env()?)?;
//! let ack = client.update_wall_from_args(&ctx, args).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

use std::sync::Arc;

use wall_updater_sdk::WallUpdaterError;

pub mod agent;
pub mod config;
pub mod domain;
pub mod infra;
pub mod tools;

pub use agent::AgentProfile;
pub use config::{DeploymentMode, WallUpdaterConfig};
pub use domain::helpdocs::{HelpDocsSearch, StaticHelpDocs};
pub use domain::local_client::LocalClient;
pub use domain::ports::{WallApiResponse, WallApiTransport};
pub use domain::sanitize::{sanitize, sanitize_update};
pub use domain::service::WallUpdateService;
pub use infra::RailsWallClient;
pub use tools::ToolDescriptor;

/// Wire a client backed by the reqwest transport and the static help docs.
///
/// # Errors
/// Returns [`WallUpdaterError::Config`] if the HTTP client cannot be built.
pub fn build_client(
    config: WallUpdaterConfig,
) -> Result<LocalClient<RailsWallClient>, WallUpdaterError> {
    let transport = RailsWallClient::new(config.request_timeout())?;
    let service = WallUpdateService::new(Arc::new(transport), config);
    Ok(LocalClient::new(
        Arc::new(service),
        Arc::new(StaticHelpDocs::default()),
    ))
}
