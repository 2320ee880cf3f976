//! Jobby Store
//!
//! The authoritative, in-memory home of every job record.
//!
//! - Repository: owns the collection behind a lock and applies mutations atomically
//! - Service: validation, logging and error reporting on top of the repository
//! - Draft: local status cycling that is written back through the service once
//!
//! Consumers hold a [`JobService`] and only ever receive cloned snapshots.

pub mod repository;
pub mod service;

pub use jobby_core::domain::job::{Job, JobStatus};
pub use jobby_core::dto::job::{CreateJob, UpdateJob};
pub use jobby_core::query::{StatusCounts, StatusFilter, counts_by_status, filter};
pub use service::draft::StatusDraft;
pub use service::job::{JobError, JobService};
