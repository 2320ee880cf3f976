//! Job command handlers
//!
//! Handles recording, listing, viewing, editing and deleting jobs.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::Args;
use colored::*;
use jobby_store::{CreateJob, Job, JobService, JobStatus, StatusFilter, UpdateJob, filter};

use super::Session;
use crate::id_resolver::resolve;
use crate::types::short_id;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Job title (required)
    #[arg(short, long)]
    pub title: String,

    /// Company name (required)
    #[arg(short, long)]
    pub company: String,

    #[arg(short, long)]
    pub location: Option<String>,

    /// Free-form salary, e.g. "$100,000"
    #[arg(long)]
    pub salary: Option<String>,

    /// Initial status (defaults to applied)
    #[arg(short, long)]
    pub status: Option<JobStatus>,

    #[arg(short, long)]
    pub description: Option<String>,

    #[arg(short, long)]
    pub notes: Option<String>,
}

impl From<AddArgs> for CreateJob {
    fn from(args: AddArgs) -> Self {
        CreateJob {
            title: args.title,
            company: args.company,
            location: args.location,
            salary: args.salary,
            status: args.status,
            description: args.description,
            notes: args.notes,
        }
    }
}

/// Arguments for `edit`
///
/// Only the given flags are changed. Pass an empty string to clear an
/// optional field.
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Job ID or unambiguous prefix
    pub id: String,

    #[arg(short, long)]
    pub title: Option<String>,

    #[arg(short, long)]
    pub company: Option<String>,

    #[arg(short, long)]
    pub location: Option<String>,

    #[arg(long)]
    pub salary: Option<String>,

    #[arg(short, long)]
    pub status: Option<JobStatus>,

    /// Interview time: RFC 3339, "YYYY-MM-DD HH:MM" or "YYYY-MM-DD" (UTC)
    #[arg(short, long, value_parser = parse_interview_date)]
    pub interview: Option<DateTime<Utc>>,

    #[arg(short, long)]
    pub description: Option<String>,

    #[arg(short, long)]
    pub notes: Option<String>,
}

impl EditArgs {
    fn into_patch(self) -> UpdateJob {
        UpdateJob {
            title: self.title,
            company: self.company,
            location: self.location,
            salary: self.salary,
            status: self.status,
            interview_date: self.interview,
            description: self.description,
            notes: self.notes,
        }
    }
}

/// Parse an interview date typed at the prompt
pub fn parse_interview_date(input: &str) -> std::result::Result<DateTime<Utc>, String> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M") {
        return Ok(naive.and_utc());
    }
    if let Some(naive) = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(naive.and_utc());
    }

    Err(format!(
        "'{}' is not a date (use RFC 3339, \"YYYY-MM-DD HH:MM\" or \"YYYY-MM-DD\")",
        input
    ))
}

/// Record a new job
pub fn add_job(service: &JobService, args: AddArgs) -> Result<()> {
    let job = service.create(args.into())?;

    println!(
        "{} {} added ({})",
        "✓".green(),
        job.title.bold(),
        short_id(job.id).dimmed()
    );

    Ok(())
}

/// List jobs matching a status filter
pub fn list_jobs(service: &JobService, status: StatusFilter, json: bool) -> Result<()> {
    let jobs = filter(&service.get_all(), status);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&jobs).context("Failed to serialize jobs")?
        );
        return Ok(());
    }

    if jobs.is_empty() {
        match status {
            StatusFilter::All => println!("{}", "You haven't added any jobs yet!".yellow()),
            StatusFilter::Only(s) => println!("{}", format!("No {} jobs.", s).yellow()),
        }
    } else {
        println!("{}", format!("Found {} job(s):", jobs.len()).bold());
        println!();
        for job in &jobs {
            print_job_summary(job);
        }
    }

    Ok(())
}

/// Get and display a single job
pub fn show_job(service: &JobService, id: &str, json: bool) -> Result<()> {
    let uuid = resolve(service, id)?;
    let job = service
        .get_by_id(uuid)
        .with_context(|| format!("Job {} not found", uuid))?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&job).context("Failed to serialize job")?
        );
    } else {
        print_job_details(&job);
    }

    Ok(())
}

/// Apply an edit to a job
pub fn edit_job(service: &JobService, args: EditArgs) -> Result<()> {
    let uuid = resolve(service, &args.id)?;
    service
        .get_by_id(uuid)
        .with_context(|| format!("Job {} not found", uuid))?;

    let patch = args.into_patch();
    if patch.is_empty() {
        println!("{}", "Nothing to change.".yellow());
        return Ok(());
    }

    let job = service.update(uuid, patch)?;
    println!("{} {} updated", "✓".green(), job.title.bold());

    Ok(())
}

/// Delete a job
///
/// An open status draft for the same job is dropped as well.
pub fn delete_job(session: &mut Session, id: &str) -> Result<()> {
    let uuid = resolve(&session.service, id)?;
    session.service.delete(uuid)?;

    if session
        .draft
        .as_ref()
        .is_some_and(|draft| draft.job_id() == uuid)
    {
        session.draft = None;
    }

    println!("{} Job {} deleted", "✓".green(), short_id(uuid).dimmed());

    Ok(())
}

/// Print a one-entry summary for list output
fn print_job_summary(job: &Job) {
    println!(
        "  {} {} {} at {}",
        "▸".cyan(),
        short_id(job.id).dimmed(),
        job.title.bold(),
        job.company
    );
    println!("    Status:   {}", colorize_status(job.status));
    if let Some(location) = &job.location {
        println!("    Location: {}", location);
    }
    println!(
        "    Applied:  {}",
        job.date.format("%Y-%m-%d").to_string().dimmed()
    );
    println!();
}

/// Print detailed job information
pub(super) fn print_job_details(job: &Job) {
    println!("{}", "Job Details:".bold());
    println!("  ID:        {}", job.id.to_string().cyan());
    println!("  Title:     {}", job.title.bold());
    println!("  Company:   {}", job.company);
    println!("  Status:    {}", colorize_status(job.status));
    println!("  Applied:   {}", job.date.format("%Y-%m-%d %H:%M"));

    if let Some(interview) = job.interview_date {
        println!("  Interview: {}", interview.format("%Y-%m-%d %H:%M"));
    }
    if let Some(location) = &job.location {
        println!("  Location:  {}", location);
    }
    if let Some(salary) = &job.salary {
        println!("  Salary:    {}", salary);
    }
    if let Some(description) = &job.description {
        println!("\n{}", "Description:".bold());
        println!("{}", description);
    }
    if let Some(notes) = &job.notes {
        println!("\n{}", "Notes:".bold());
        println!("{}", notes);
    }
}

/// Colorize job status for display
pub(super) fn colorize_status(status: JobStatus) -> ColoredString {
    let status_str = status.as_str();
    match status {
        JobStatus::Applied => status_str.blue(),
        JobStatus::Interviewing => status_str.yellow(),
        JobStatus::Offered => status_str.green(),
        JobStatus::Rejected => status_str.red(),
        JobStatus::Withdrawn => status_str.dimmed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_interview_date_formats() {
        let dt = parse_interview_date("2026-11-03 14:30").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2026, 11, 3));
        assert_eq!((dt.hour(), dt.minute()), (14, 30));

        let dt = parse_interview_date("2026-11-03T14:30:00+02:00").unwrap();
        assert_eq!(dt.hour(), 12);

        let dt = parse_interview_date("2026-11-03").unwrap();
        assert_eq!(dt.hour(), 0);

        assert!(parse_interview_date("next tuesday").is_err());
    }

    #[test]
    fn test_edit_without_flags_changes_nothing() {
        let service = JobService::new();
        let job = service.create(CreateJob::new("Engineer", "Acme")).unwrap();

        let args = EditArgs {
            id: job.id.to_string(),
            title: None,
            company: None,
            location: None,
            salary: None,
            status: None,
            interview: None,
            description: None,
            notes: None,
        };
        edit_job(&service, args).unwrap();

        assert_eq!(service.get_by_id(job.id), Some(job));
    }

    #[test]
    fn test_edit_unknown_job_without_flags_is_an_error() {
        let service = JobService::new();
        let args = EditArgs {
            id: uuid::Uuid::new_v4().to_string(),
            title: None,
            company: None,
            location: None,
            salary: None,
            status: None,
            interview: None,
            description: None,
            notes: None,
        };

        let err = edit_job(&service, args).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_add_rejects_blank_title() {
        let service = JobService::new();
        let args = AddArgs {
            title: " ".to_string(),
            company: "Acme".to_string(),
            location: None,
            salary: None,
            status: None,
            description: None,
            notes: None,
        };

        assert!(add_job(&service, args).is_err());
        assert!(service.is_empty());
    }

    #[test]
    fn test_delete_drops_matching_draft() {
        let mut session = Session::new(JobService::new());
        let job = session
            .service
            .create(CreateJob::new("Engineer", "Acme"))
            .unwrap();
        session.draft = Some(jobby_store::StatusDraft::open(&session.service, job.id).unwrap());

        delete_job(&mut session, &job.id.to_string()).unwrap();

        assert!(session.draft.is_none());
        assert!(session.service.is_empty());
    }
}
