// File: crates/frame-plot/src/main.rs
// Summary: CLI entry point; parses flags, sets up logging and runs the exporter.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use frame_plot::cli::Cli;
use frame_plot::ChartExporter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Quiet unless asked: a successful run only leaves the images behind.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = cli.export_config();
    let written = ChartExporter::new(config.clone())
        .run()
        .with_context(|| format!("failed to export charts from '{}'", config.source.display()))?;

    tracing::info!(count = written.len(), prefix = %config.output_prefix, "done");
    Ok(())
}
