// Declare modules
pub mod aggregator;
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::io;

use self::aggregator::Aggregator;
use self::cli::Cli;
use self::config::resolve_config;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Identify Scan Root & Project Name
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    // Preset auto-detection keys off the folder name
    let project_name = current_dir.file_name().and_then(|n| n.to_str());

    // 3. Resolve Configuration
    let config = resolve_config(args, project_name)?;

    // 4. Walk, Read, Emit
    let stdout = io::stdout();
    let report = Aggregator::new(&current_dir, &config).run(&mut stdout.lock())?;

    log::debug!(
        "{} file(s) added to {}, {} skipped",
        report.added.len(),
        report.output_path.display(),
        report.skipped.len()
    );

    Ok(())
}
