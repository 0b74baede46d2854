use clap::{Parser, Subcommand};

mod check;
mod common;
mod schema;
mod update;

/// Apply partial updates to walls through the wall service
#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(name = "wall-updater")]
struct Cli {
    #[command(flatten)]
    common_args: common::CommonArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one update from a JSON file
    Update(update::UpdateArgs),
    /// Print the tool descriptors (name, description, input schema) as JSON
    Schema(schema::SchemaArgs),
    /// Validate configuration and the agent profile, then exit
    Check(check::CheckArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    common::init_logging(cli.common_args.verbose);

    match cli.command {
        Commands::Update(update) => update.run(&cli.common_args).await,
        Commands::Schema(schema) => schema.run(),
        Commands::Check(check) => check.run(&cli.common_args),
    }
}
