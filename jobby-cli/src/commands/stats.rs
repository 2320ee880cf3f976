//! Overview command

use anyhow::{Context, Result};
use colored::*;
use jobby_store::JobService;

use super::job::colorize_status;

/// Print per-status totals
pub fn show_stats(service: &JobService, json: bool) -> Result<()> {
    let counts = service.counts();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&counts).context("Failed to serialize counts")?
        );
        return Ok(());
    }

    println!("{}", "Job Overview".bold());
    println!("  {:<14}{}", "All", counts.total.to_string().bold());
    for (status, count) in counts.iter() {
        println!(
            "  {:<14}{}  {}",
            status.label(),
            count,
            colorize_status(status).dimmed()
        );
    }

    Ok(())
}
