use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "adfontes")]
#[command(about = "Ad Fontes - dictionary lookups formatted for pasting", long_about = None)]
struct Cli {
    /// Override the config directory (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a word, format the result, and copy it to the clipboard
    Define(commands::define::DefineArgs),
    /// Manage reusable prompt templates
    Prompt {
        #[command(subcommand)]
        action: commands::prompt::PromptAction,
    },
    /// Manage per-site settings
    Site {
        #[command(subcommand)]
        action: commands::site::SiteAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let base_dir = cli.config_dir.as_deref();

    match cli.command {
        Commands::Define(args) => commands::define::run(base_dir, args).await?,
        Commands::Prompt { action } => commands::prompt::run(base_dir, action).await?,
        Commands::Site { action } => commands::site::run(base_dir, action).await?,
    }

    Ok(())
}
