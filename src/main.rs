//! Idea Center API test harness CLI
//!
//! Authenticates against the configured deployment and runs the ordered
//! CRUD suite, or serves as a one-off probe for individual endpoints.

use clap::Parser;
use ideahub::commands::Commands;
use ideahub::{cli, common};

#[derive(Parser)]
#[command(name = "ideahub", about = "Idea Center API test harness")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    common::logging::init_cli();

    let cli = Cli::parse();

    if let Err(e) = cli::dispatch(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
