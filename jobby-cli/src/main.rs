//! Jobby CLI
//!
//! Interactive shell for recording and reviewing job applications.

mod commands;
mod config;
mod id_resolver;
mod shell;
mod types;

use anyhow::{Context, Result};
use clap::Parser;
use config::{Config, DEFAULT_LOG_FILTER};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jobby")]
#[command(about = "Job application tracker", long_about = None)]
struct Cli {
    /// Disable coloured output
    #[arg(long, env = "JOBBY_NO_COLOR")]
    no_color: bool,

    /// Log filter directives
    #[arg(long, env = "JOBBY_LOG", default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,

    /// Start with a few sample applications
    #[arg(long)]
    seed_demo: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        color: !cli.no_color,
        log_filter: cli.log_filter,
        seed_demo: cli.seed_demo,
    };
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_filter).context("Invalid log filter")?)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if !config.color {
        colored::control::set_override(false);
    }

    tracing::debug!("Starting Jobby shell with {:?}", config);

    shell::run(&config)
}
