use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use wall_updater_sdk::{CallContext, WallUpdate, WallUpdaterClientV1};

use crate::common::CommonArgs;

#[derive(Args)]
pub struct UpdateArgs {
    /// Id of the wall to update
    #[arg(short = 'w', long)]
    wall_id: i64,

    /// JSON file holding the update (`padlet_title`, `posts`, `settings`, ...)
    #[arg(short = 'f', long)]
    file: PathBuf,

    /// Bearer token for this call; falls back to `PADLET_AI_TOKEN`
    #[arg(long)]
    token: Option<String>,
}

impl UpdateArgs {
    pub async fn run(&self, common: &CommonArgs) -> anyhow::Result<()> {
        let config = common.load_config()?;

        let raw = std::fs::read_to_string(&self.file)
            .with_context(|| format!("failed to read {}", self.file.display()))?;
        let value: serde_json::Value = serde_json::from_str(&raw)
            .with_context(|| format!("{} is not valid JSON", self.file.display()))?;
        let update = WallUpdate::from_value(value)?;
        if update.is_empty() {
            tracing::warn!(wall_id = self.wall_id, "Update carries no fields");
        }

        let mut ctx = CallContext::new();
        if let Some(token) = &self.token {
            ctx = ctx.with_configurable_token(token.clone());
        }

        let client = wall_updater::build_client(config)?;
        let ack = client.update_wall(&ctx, self.wall_id, update).await?;
        println!("{}", serde_json::to_string(&ack)?);
        Ok(())
    }
}
