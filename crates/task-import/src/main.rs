//! Habitica import CLI - replay a JSON task export into a Habitica account.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use habitica::{ClientConfig, Credentials, DEFAULT_API_BASE, DEFAULT_CLIENT_ID};
use task_import::config::DEFAULT_INPUT_FILE;
use task_import::{ImportConfig, RunSummary};

/// Import habits, dailies, to-dos and rewards from a JSON export into Habitica.
///
/// Tags are matched by name against the account's existing tags and created
/// when missing.
#[derive(Parser)]
#[command(name = "habitica-import")]
#[command(about = "Import tasks from a JSON export into Habitica")]
#[command(version)]
struct Cli {
    /// JSON export to import
    #[arg(short, long, env = "HABITICA_IMPORT_FILE", default_value = DEFAULT_INPUT_FILE)]
    file: PathBuf,

    /// Habitica user id (Settings > API)
    #[arg(long, env = "HABITICA_USER_ID", hide_env_values = true)]
    user_id: String,

    /// Habitica API token (Settings > API)
    #[arg(long, env = "HABITICA_API_TOKEN", hide_env_values = true)]
    api_token: String,

    /// API base URL
    #[arg(long, env = "HABITICA_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// Value sent in the x-client header
    #[arg(long, env = "HABITICA_CLIENT_ID", default_value = DEFAULT_CLIENT_ID)]
    client_id: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // A failed run is reported, not turned into a failing exit status.
    if let Err(e) = run(cli).await {
        error!(error = %e, "Import aborted");
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "habitica_import=debug,task_import=debug,habitica=debug,info"
    } else {
        "habitica_import=info,task_import=info,habitica=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let credentials = Credentials::new(cli.user_id, cli.api_token)
        .context("Invalid Habitica credentials")?;
    let client_config = ClientConfig::new(credentials)
        .with_base_url(cli.api_base)
        .with_client_id(cli.client_id);
    debug!(file = %cli.file.display(), ?client_config, "Starting import");

    if let Some(summary) = task_import::run(ImportConfig::new(cli.file), client_config).await? {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    let heading = if summary.all_succeeded() {
        "Import complete".green().bold()
    } else {
        format!("Import complete with {} failed tasks", summary.failed())
            .yellow()
            .bold()
    };

    println!("\n🎉 {heading}");
    print!("{summary}");
}
