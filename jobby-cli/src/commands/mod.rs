//! Commands module
//!
//! Defines the shell commands and routes them to their handlers. A
//! [`Session`] carries the store and any open status draft between lines.

mod draft;
mod job;
mod stats;

use job::{AddArgs, EditArgs};

use anyhow::Result;
use clap::{Parser, Subcommand};
use jobby_store::{JobService, StatusDraft, StatusFilter};

/// One line typed at the shell prompt
#[derive(Parser, Debug)]
#[command(name = "jobby", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Shell commands
#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Record a new job application
    Add(AddArgs),
    /// List jobs, optionally filtered by status
    #[command(alias = "ls")]
    List {
        /// Status to show, or "all"
        #[arg(short, long, default_value = "all")]
        status: StatusFilter,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one job in detail
    Show {
        /// Job ID or unambiguous prefix
        id: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change fields of a job
    Edit(EditArgs),
    /// Delete a job permanently
    #[command(alias = "rm")]
    Delete {
        /// Job ID or unambiguous prefix
        id: String,
    },
    /// Overview of applications per status
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Open a job's status for cycling
    Open {
        /// Job ID or unambiguous prefix
        id: String,
    },
    /// Advance the open job's status one step (not saved yet)
    Next,
    /// Save the open job's status and close it
    Close,
    /// Close the open job without saving its status
    Discard,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Whether the shell should keep reading lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// State shared by the commands of one shell run
pub struct Session {
    pub service: JobService,
    pub draft: Option<StatusDraft>,
}

impl Session {
    pub fn new(service: JobService) -> Self {
        Self {
            service,
            draft: None,
        }
    }
}

/// Handle a shell command
///
/// Routes the command to the appropriate handler module.
pub fn handle_command(session: &mut Session, command: ShellCommand) -> Result<Flow> {
    match command {
        ShellCommand::Add(args) => job::add_job(&session.service, args)?,
        ShellCommand::List { status, json } => job::list_jobs(&session.service, status, json)?,
        ShellCommand::Show { id, json } => job::show_job(&session.service, &id, json)?,
        ShellCommand::Edit(args) => job::edit_job(&session.service, args)?,
        ShellCommand::Delete { id } => job::delete_job(session, &id)?,
        ShellCommand::Stats { json } => stats::show_stats(&session.service, json)?,
        ShellCommand::Open { id } => draft::open(session, &id)?,
        ShellCommand::Next => draft::advance(session)?,
        ShellCommand::Close => draft::close(session)?,
        ShellCommand::Discard => draft::discard(session)?,
        ShellCommand::Quit => {
            draft::discard_on_exit(session);
            return Ok(Flow::Quit);
        }
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobby_store::{CreateJob, JobStatus};

    fn parse(line: &str) -> ShellCommand {
        let words = shlex::split(line).unwrap();
        ShellLine::try_parse_from(words).unwrap().command
    }

    #[test]
    fn test_parse_add_with_quoted_values() {
        match parse(r#"add --title "Software Engineer" --company Acme --status interviewing"#) {
            ShellCommand::Add(args) => {
                assert_eq!(args.title, "Software Engineer");
                assert_eq!(args.company, "Acme");
                assert_eq!(args.status, Some(JobStatus::Interviewing));
                assert_eq!(args.location, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_filter() {
        match parse("list") {
            ShellCommand::List { status, json } => {
                assert_eq!(status, StatusFilter::All);
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        match parse("ls -s offered --json") {
            ShellCommand::List { status, json } => {
                assert_eq!(status, StatusFilter::Only(JobStatus::Offered));
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        let words = shlex::split("list --status interview").unwrap();
        assert!(ShellLine::try_parse_from(words).is_err());
    }

    #[test]
    fn test_parse_exit_alias() {
        assert!(matches!(parse("exit"), ShellCommand::Quit));
    }

    #[test]
    fn test_session_round_trip() {
        let mut session = Session::new(JobService::new());

        handle_command(&mut session, parse("add --title Engineer --company Acme")).unwrap();
        let job = session.service.get_all().remove(0);

        let open = format!("open {}", &job.id.to_string()[..8]);
        handle_command(&mut session, parse(&open)).unwrap();
        handle_command(&mut session, parse("next")).unwrap();
        handle_command(&mut session, parse("next")).unwrap();
        handle_command(&mut session, parse("close")).unwrap();

        assert!(session.draft.is_none());
        assert_eq!(
            session.service.get_by_id(job.id).unwrap().status,
            JobStatus::Offered
        );
    }

    #[test]
    fn test_discarded_draft_is_not_saved() {
        let mut session = Session::new(JobService::new());
        let job = session
            .service
            .create(CreateJob::new("Engineer", "Acme"))
            .unwrap();

        handle_command(&mut session, parse(&format!("open {}", job.id))).unwrap();
        handle_command(&mut session, parse("next")).unwrap();
        handle_command(&mut session, parse("discard")).unwrap();

        assert_eq!(
            session.service.get_by_id(job.id).unwrap().status,
            JobStatus::Applied
        );
    }

    #[test]
    fn test_close_keeps_edit_made_while_open() {
        let mut session = Session::new(JobService::new());
        let job = session
            .service
            .create(CreateJob::new("Engineer", "Acme"))
            .unwrap();

        handle_command(&mut session, parse(&format!("open {}", job.id))).unwrap();
        handle_command(&mut session, parse("next")).unwrap();
        handle_command(
            &mut session,
            parse(&format!("edit {} --status rejected", job.id)),
        )
        .unwrap();

        assert!(handle_command(&mut session, parse("close")).is_err());
        assert!(session.draft.is_none());
        assert_eq!(
            session.service.get_by_id(job.id).unwrap().status,
            JobStatus::Rejected
        );
    }

    #[test]
    fn test_close_unchanged_draft_keeps_edit() {
        let mut session = Session::new(JobService::new());
        let job = session
            .service
            .create(CreateJob::new("Engineer", "Acme"))
            .unwrap();

        handle_command(&mut session, parse(&format!("open {}", job.id))).unwrap();
        handle_command(
            &mut session,
            parse(&format!("edit {} --status rejected", job.id)),
        )
        .unwrap();
        handle_command(&mut session, parse("close")).unwrap();

        assert_eq!(
            session.service.get_by_id(job.id).unwrap().status,
            JobStatus::Rejected
        );
    }

    #[test]
    fn test_quit_stops_the_shell() {
        let mut session = Session::new(JobService::new());
        assert_eq!(
            handle_command(&mut session, ShellCommand::Quit).unwrap(),
            Flow::Quit
        );
    }

    #[test]
    fn test_delete_unknown_job_is_an_error() {
        let mut session = Session::new(JobService::new());
        let line = format!("delete {}", uuid::Uuid::new_v4());
        assert!(handle_command(&mut session, parse(&line)).is_err());
    }
}
