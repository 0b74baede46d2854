//! Wall Updater SDK
//!
//! Public contract for applying agent-authored edits to a wall:
//! - `WallUpdaterClientV1` trait
//! - Partial update models (`WallUpdate`, `PostUpdate`, `SettingsUpdate`, ...)
//! - Call context access (`CallContext`, `CallContextAccessor`)
//! - Error type (`WallUpdaterError`)
//!
//! ```ignore
//! use wall_updater_sdk::{CallContext, WallUpdate, WallUpdaterClientV1};
//!
//! let ctx = CallContext::new().with_configurable_token(token);
//! let update = WallUpdate { title: Some("Field trip".into()), ..Default::default() };
//! let ack = client.update_wall(&ctx, 42, update).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod context;
pub mod error;
pub mod models;

pub use api::WallUpdaterClientV1;
pub use context::{CallContext, CallContextAccessor, PADLET_TOKEN_KEY};
pub use error::{UpdateFailure, WallUpdaterError};
pub use models::{
    AttachmentType, CustomFieldDefinition, CustomFieldValue, LocationData, NEW_ID_PREFIX,
    PostColor, PostUpdate, ReactionType, SearchHelpDocsArgs, SectionUpdate, SettingsUpdate,
    UpdateWallArgs, WallFormat, WallUpdate, WallUpdateAck,
};
