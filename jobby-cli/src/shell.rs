//! Interactive shell
//!
//! Reads lines with a rustyline editor, splits them shell-style and runs
//! them as [`ShellCommand`]s against one store for the whole run.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use colored::*;
use jobby_store::{CreateJob, JobService, JobStatus, UpdateJob};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::commands::{Flow, Session, ShellLine, handle_command};
use crate::config::Config;
use crate::types::short_id;

/// Run the shell until `quit` or end of input
pub fn run(config: &Config) -> Result<()> {
    let service = JobService::new();
    if config.seed_demo {
        seed_demo(&service)?;
    }

    let mut session = Session::new(service);
    let mut editor = DefaultEditor::new().context("Failed to start line editor")?;

    println!("{}", "Jobby: track your job applications".bold());
    println!("{}", "Type `help` for commands, `quit` to leave.".dimmed());

    loop {
        match editor.readline(&prompt(&session)) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);

                match execute_line(&mut session, line) {
                    Ok(Flow::Quit) => break,
                    Ok(Flow::Continue) => {}
                    Err(e) => eprintln!("{} {:#}", "error:".red().bold(), e),
                }
            }
            // Ctrl-C abandons the current line only
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => {
                handle_command(&mut session, crate::commands::ShellCommand::Quit)?;
                break;
            }
            Err(e) => return Err(e).context("Failed to read input"),
        }
    }

    Ok(())
}

/// Parse and run one input line
///
/// Usage errors and help output are printed by clap and do not end the
/// session.
pub fn execute_line(session: &mut Session, line: &str) -> Result<Flow> {
    let words = shlex::split(line).ok_or_else(|| anyhow!("Unbalanced quotes in input"))?;

    let parsed = match ShellLine::try_parse_from(words) {
        Ok(parsed) => parsed,
        Err(e) => {
            e.print().context("Failed to print usage")?;
            return Ok(Flow::Continue);
        }
    };

    handle_command(session, parsed.command)
}

fn prompt(session: &Session) -> String {
    match &session.draft {
        Some(draft) => format!(
            "jobby [{} {}]> ",
            short_id(draft.job_id()),
            draft.pending()
        ),
        None => "jobby> ".to_string(),
    }
}

/// Preload a handful of sample applications
pub fn seed_demo(service: &JobService) -> Result<()> {
    let samples = [
        CreateJob::new("Software Developer", "Google")
            .with_location("New York, NY")
            .with_salary("$100,000"),
        CreateJob::new("Product Designer", "Spotify").with_location("Stockholm, Sweden"),
        CreateJob::new("Backend Engineer", "Klarna")
            .with_location("Remote")
            .with_status(JobStatus::Interviewing),
        CreateJob::new("Frontend Engineer", "Acme").with_status(JobStatus::Rejected),
    ];

    for sample in samples {
        service.create(sample)?;
    }

    if let Some(job) = service.get_by_status(JobStatus::Interviewing).first() {
        service.update(
            job.id,
            UpdateJob {
                interview_date: Some(chrono::Utc::now() + chrono::Duration::days(7)),
                ..UpdateJob::default()
            },
        )?;
    }

    tracing::info!("Seeded {} demo jobs", service.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_demo() {
        let service = JobService::new();
        seed_demo(&service).unwrap();

        let counts = service.counts();
        assert_eq!(counts.total, 4);
        assert_eq!(counts.get(JobStatus::Applied), 2);
        assert!(service.get_by_status(JobStatus::Interviewing)[0]
            .interview_date
            .is_some());
    }

    #[test]
    fn test_execute_line_keeps_running_on_usage_error() {
        let mut session = Session::new(JobService::new());

        assert_eq!(execute_line(&mut session, "frobnicate").unwrap(), Flow::Continue);
        assert_eq!(execute_line(&mut session, "help").unwrap(), Flow::Continue);
        assert!(execute_line(&mut session, "add --title \"oops").is_err());
    }

    #[test]
    fn test_execute_line_runs_commands() {
        let mut session = Session::new(JobService::new());

        execute_line(&mut session, "add -t 'Data Analyst' -c Initech -l Austin").unwrap();
        let job = session.service.get_all().remove(0);
        assert_eq!(job.title, "Data Analyst");
        assert_eq!(job.location.as_deref(), Some("Austin"));

        let edit = format!("edit {} --status offered --notes 'great team'", job.id);
        execute_line(&mut session, &edit).unwrap();
        let job = session.service.get_by_id(job.id).unwrap();
        assert_eq!(job.status, JobStatus::Offered);
        assert_eq!(job.notes.as_deref(), Some("great team"));

        assert_eq!(execute_line(&mut session, "quit").unwrap(), Flow::Quit);
    }

    #[test]
    fn test_prompt_shows_open_draft() {
        let mut session = Session::new(JobService::new());
        assert_eq!(prompt(&session), "jobby> ");

        let job = session
            .service
            .create(CreateJob::new("Engineer", "Acme"))
            .unwrap();
        execute_line(&mut session, &format!("open {}", job.id)).unwrap();
        execute_line(&mut session, "next").unwrap();

        assert_eq!(
            prompt(&session),
            format!("jobby [{} interviewing]> ", short_id(job.id))
        );
    }
}
