// tc-migrate - Taskcluster deployment migration tool
// Copyright (c) 2026 tc-migrate Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use std::sync::Arc;
use tc_migrate::cli::Cli;
use tc_migrate::config::Settings;
use tc_migrate::core::migrate::{steps, RunContext};
use tc_migrate::core::runner::TaskRunner;
use tc_migrate::logging::init_logging;
use tc_migrate::render;

#[tokio::main]
async fn main() {
    // Load environment variables from a .env file if present; a missing
    // file is silently ignored.
    let _ = dotenvy::dotenv();

    let _cli = Cli::parse();

    if let Err(e) = init_logging("tc_migrate=info") {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(1);
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "tc-migrate - Taskcluster deployment migration"
    );

    if let Err(e) = run().await {
        tracing::error!(error = %e, "migration failed");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    tracing::info!(
        source = %settings.source_root_url,
        destination = %settings.destination_root_url,
        "starting migration"
    );

    let context = Arc::new(RunContext::from_settings(&settings)?);
    let renderer = render::for_stdout();

    TaskRunner::new(steps(), context, renderer).run().await?;

    tracing::info!("migration completed");
    Ok(())
}
