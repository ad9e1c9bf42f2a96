mod changes;
mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, RunOptions, base_directory, config_file_path};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::git::GitCli;

#[derive(Parser)]
#[command(
    name = "nudge",
    author,
    version,
    about = "Makes small housekeeping commits across configured repositories"
)]
struct Cli {
    /// Compute changes and log what would be committed without writing or pushing.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let options = RunOptions {
        dry_run: cli.dry_run,
    };

    let base_dir = base_directory()?;
    let config_path = config_file_path(&base_dir);
    let config = AppConfig::load(&config_path)?;

    info!(
        config = %config_path.display(),
        repositories = config.repositories.len(),
        dry_run = options.dry_run,
        "starting run"
    );
    if options.dry_run {
        eprintln!("Dry run: no files will be written and nothing will be pushed.");
    }

    let context = AppContext::new(options, base_dir, Arc::new(GitCli::new()));
    let summary = cmd::run::run(&context, &config).await;

    info!(repositories = summary.total(), "run finished");
    println!("{summary}");

    Ok(())
}
