//! Chunkmill CLI
//!
//! Structure-aware chunking for retrieval ingestion pipelines.

use anyhow::Result;
use chunkmill_core::error::exit_codes;
use clap::Parser;

mod app;
mod commands;

use app::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    let result: Result<()> = match cli.command {
        Commands::Transform(args) => commands::transform::run(args, cli.format).await,
        Commands::Chunk(args) => commands::chunk::run(args, cli.format).await,
        Commands::Languages => commands::languages::run(cli.format),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        let code = err
            .downcast_ref::<chunkmill_core::Error>()
            .map(|e| e.exit_code())
            .unwrap_or(exit_codes::GENERAL_ERROR);
        std::process::exit(code);
    }
}
