//! Command-line entry point for the stat planner.
mod args;
mod config;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use statcraft_content::{ProfileLoader, TablesLoader};
use statcraft_core::{PlanningError, determine_optimal_stats};
use tracing_subscriber::EnvFilter;

use args::Cli;
use config::CliConfig;
use report::Report;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let cli = Cli::parse();
    let config = CliConfig::from_env();

    let mut profile = match cli.profile_path(&config) {
        Some(path) => ProfileLoader::load(&path)?,
        None => ProfileLoader::embedded()?,
    };
    cli.apply(&mut profile);

    let tables = match cli.tables_path(&config) {
        Some(path) => TablesLoader::load(&path)?,
        None => TablesLoader::embedded()?,
    };
    tracing::debug!("Loaded {} weapon delay entries", tables.len());
    for (class, category, delay) in tables.iter() {
        tracing::trace!("Weapon delay: {} with {} = {}", class, category, delay);
    }

    let optimum = determine_optimal_stats(
        &profile.character,
        &tables,
        &profile.bonuses,
        profile.requirements,
    )
    .map_err(|e| {
        tracing::error!("Planning failed [{}]: {}", e.error_code(), e);
        e
    })
    .context("Failed to plan stats")?;

    println!(
        "{}",
        Report {
            profile: &profile,
            optimum: &optimum,
        }
    );

    Ok(())
}

/// Logs go to stderr so the report on stdout stays clean.
fn setup_logging() {
    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
