use clap::Args;
use wall_updater::AgentProfile;

use crate::common::CommonArgs;

#[derive(Args)]
pub struct CheckArgs {
    /// Fail when no fallback token is configured
    #[arg(long)]
    require_token: bool,
}

impl CheckArgs {
    pub fn run(&self, common: &CommonArgs) -> anyhow::Result<()> {
        let config = common.load_config()?;
        let profile = AgentProfile::surface_chat_v1()?;

        let Some(base_url) = config.base_url() else {
            anyhow::bail!("RAILS_INTERNAL_URL is not set");
        };
        let has_token = config.padlet_ai_token.is_some();
        if self.require_token && !has_token {
            anyhow::bail!("PADLET_AI_TOKEN is not set");
        }

        tracing::info!(
            base_url,
            environment = config.environment.as_str(),
            fallback_token = has_token,
            timeout_ms = config.request_timeout_ms,
            agent = profile.name(),
            "Configuration OK"
        );
        println!("configuration OK ({} -> {base_url})", profile.name());
        Ok(())
    }
}
