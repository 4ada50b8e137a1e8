//! coverdeck - terminal insurance dashboard
//!
//! Renders the policies you hold, a marketplace of purchasable policies,
//! and a modal claim form, backed by fixture data until a real policy
//! directory is wired in.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use coverdeck_core::{DashboardConfig, FixtureDirectory, InMemoryIntake, PolicyDirectory};
use coverdeck_tui::{terminal, App};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "coverdeck",
    author,
    version,
    about = "Terminal dashboard for insurance policies, marketplace and claims"
)]
struct Cli {
    /// Debug logging (RUST_LOG overrides; needs --log-file to go anywhere)
    #[arg(long)]
    debug: bool,

    /// Config file (default: ~/.coverdeck/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Append log lines to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli)?;

    let config = match &cli.config {
        Some(path) => DashboardConfig::load_from(path),
        None => DashboardConfig::load(),
    };

    let directory = match &config.general.fixtures {
        Some(path) => FixtureDirectory::from_file(path)
            .with_context(|| format!("failed to load fixtures from {}", path.display()))?,
        None => FixtureDirectory::builtin(),
    };
    let intake = InMemoryIntake::new();

    debug!(
        source = directory.name(),
        tick_ms = config.ui.tick_ms,
        "starting dashboard"
    );

    let app = App::new(config.general.user_name.clone());
    terminal::run(app, &directory, &intake, config.ui.tick())
}

/// Log to the file named by --log-file. Raw-mode terminals and stderr
/// logging do not mix, so without a file tracing stays uninitialized.
fn init_tracing(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = if cli.debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(cli.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}
