//! Status cycling commands
//!
//! `open` starts a draft for one job, `next` advances it locally and
//! `close` saves it. Nothing reaches the store until `close`.

use anyhow::{Context, Result, bail};
use colored::*;
use jobby_store::StatusDraft;

use super::Session;
use super::job::{colorize_status, print_job_details};
use crate::id_resolver::resolve;
use crate::types::short_id;

pub fn open(session: &mut Session, id: &str) -> Result<()> {
    if let Some(draft) = &session.draft {
        bail!(
            "Job {} is already open; close or discard it first",
            short_id(draft.job_id())
        );
    }

    let uuid = resolve(&session.service, id)?;
    let draft = StatusDraft::open(&session.service, uuid)?;

    if let Some(job) = session.service.get_by_id(uuid) {
        print_job_details(&job);
    }
    println!(
        "{}",
        "Use `next` to change the status, `close` to save or `discard` to cancel.".dimmed()
    );

    session.draft = Some(draft);
    Ok(())
}

pub fn advance(session: &mut Session) -> Result<()> {
    let Some(draft) = session.draft.as_mut() else {
        bail!("No job is open; use `open <id>` first");
    };

    let status = draft.advance();
    println!("  Status: {} {}", colorize_status(status), "(unsaved)".dimmed());

    Ok(())
}

pub fn close(session: &mut Session) -> Result<()> {
    let Some(draft) = session.draft.take() else {
        bail!("No job is open");
    };

    let changed = draft.is_changed();
    let job = draft
        .commit(&session.service)
        .context("Status not saved; `open` the job again to change it")?;

    if changed {
        println!(
            "{} {} is now {}",
            "✓".green(),
            job.title.bold(),
            colorize_status(job.status)
        );
    }

    Ok(())
}

pub fn discard(session: &mut Session) -> Result<()> {
    let Some(draft) = session.draft.take() else {
        bail!("No job is open");
    };

    println!(
        "Status of {} left as {}",
        short_id(draft.job_id()).dimmed(),
        colorize_status(draft.committed())
    );

    Ok(())
}

/// Drops an open draft when the shell exits
pub fn discard_on_exit(session: &mut Session) {
    if let Some(draft) = session.draft.take() {
        if draft.is_changed() {
            tracing::warn!(
                "Discarding unsaved status {} for job {}",
                draft.pending(),
                draft.job_id()
            );
        }
    }
}
