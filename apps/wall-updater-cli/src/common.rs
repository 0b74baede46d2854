use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wall_updater::WallUpdaterConfig;

#[derive(Args)]
pub struct CommonArgs {
    /// Path to a YAML configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Layered config: defaults -> YAML (if provided) -> env.
    pub fn load_config(&self) -> anyhow::Result<WallUpdaterConfig> {
        if let Some(path) = &self.config
            && !Path::new(path).is_file()
        {
            anyhow::bail!("config file does not exist: {}", path.display());
        }
        WallUpdaterConfig::load(self.config.as_deref()).context("failed to load configuration")
    }
}

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `RUST_LOG` wins over `-v` when set. Logs go to stderr; stdout carries results.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true));

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {e}");
    }
}
