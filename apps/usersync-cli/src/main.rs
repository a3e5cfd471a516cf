//! usersync CLI - Push local user changes into an AWS Cognito user pool
//!
//! Configuration comes from the environment (or a `.env` file):
//! `COGNITO_USER_POOL_ID`, `COGNITO_CLIENT_ID`, `COGNITO_REGION`,
//! `COGNITO_ENDPOINT_URL`, and optionally `AWS_ACCESS_KEY_ID` /
//! `AWS_SECRET_ACCESS_KEY`.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

use error::CliResult;

/// usersync - Cognito user synchronization
#[derive(Parser)]
#[command(name = "usersync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synchronize a user's password, email or deletion
    Sync(commands::sync::SyncArgs),

    /// Load and display the Cognito configuration
    CheckConfig(commands::check_config::CheckConfigArgs),
}

#[tokio::main]
async fn main() {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so JSON output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,usersync=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Sync(args) => commands::sync::execute(args).await,
        Commands::CheckConfig(args) => commands::check_config::execute(&args),
    }
}
