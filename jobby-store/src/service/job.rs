//! Job Service
//!
//! Business logic for job records: required-field validation, input
//! normalization and error reporting on top of the repository.

use jobby_core::domain::job::{Job, JobStatus};
use jobby_core::dto::job::{CreateJob, UpdateJob, non_blank};
use jobby_core::query::{StatusCounts, counts_by_status};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::repository::{InMemoryJobRepository, JobRepository};

/// Service error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobError {
    /// A required field is missing or blank
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// No job with this ID exists (it may have been deleted)
    #[error("Job {0} not found")]
    NotFound(Uuid),

    /// The stored status is no longer the one the caller started from
    #[error("Status of job {id} changed from {expected} to {current} in the meantime")]
    StatusChanged {
        id: Uuid,
        expected: JobStatus,
        current: JobStatus,
    },
}

impl JobError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    pub fn is_status_changed(&self) -> bool {
        matches!(self, Self::StatusChanged { .. })
    }
}

pub type Result<T> = std::result::Result<T, JobError>;

/// The job record store
///
/// Sole writer of the job collection. Clones share the same repository,
/// so one instance can be handed to every consumer.
#[derive(Clone)]
pub struct JobService {
    repo: Arc<dyn JobRepository>,
}

impl JobService {
    /// Creates a service over an empty in-memory repository
    pub fn new() -> Self {
        Self::with_repository(Arc::new(InMemoryJobRepository::new()))
    }

    /// Creates a service over an existing repository
    pub fn with_repository(repo: Arc<dyn JobRepository>) -> Self {
        Self { repo }
    }

    /// Record a new job application
    pub fn create(&self, req: CreateJob) -> Result<Job> {
        let req = normalize_create(req);
        validate_required("title", &req.title)?;
        validate_required("company", &req.company)?;

        let job = self.repo.create(req);

        tracing::info!("Job created: {} ({} at {})", job.id, job.title, job.company);
        if tracing::enabled!(tracing::Level::DEBUG) {
            log_jobs(&self.repo.list_all());
        }

        Ok(job)
    }

    /// Update the supplied fields of a job
    pub fn update(&self, id: Uuid, patch: UpdateJob) -> Result<Job> {
        let patch = normalize_update(patch);
        if let Some(title) = &patch.title {
            validate_required("title", title)?;
        }
        if let Some(company) = &patch.company {
            validate_required("company", company)?;
        }

        let job = self.repo.update(id, patch).ok_or_else(|| {
            tracing::warn!("Update of unknown job {}", id);
            JobError::NotFound(id)
        })?;

        tracing::info!("Job {} updated (status: {})", job.id, job.status);

        Ok(job)
    }

    /// Move a job from `expected` to `status`
    ///
    /// Fails with [`JobError::StatusChanged`] and leaves the job alone when
    /// its stored status is no longer `expected`.
    pub fn update_status_from(
        &self,
        id: Uuid,
        expected: JobStatus,
        status: JobStatus,
    ) -> Result<Job> {
        let job = self
            .repo
            .update_status_if(id, expected, status)
            .ok_or_else(|| {
                tracing::warn!("Status update of unknown job {}", id);
                JobError::NotFound(id)
            })?
            .map_err(|current| {
                tracing::warn!(
                    "Status of job {} is {}, expected {}; not updated",
                    id,
                    current,
                    expected
                );
                JobError::StatusChanged {
                    id,
                    expected,
                    current,
                }
            })?;

        tracing::info!("Job {} updated (status: {})", job.id, job.status);

        Ok(job)
    }

    /// Delete a job permanently
    pub fn delete(&self, id: Uuid) -> Result<()> {
        if !self.repo.delete(id) {
            tracing::warn!("Delete of unknown job {}", id);
            return Err(JobError::NotFound(id));
        }

        tracing::info!("Job {} deleted", id);

        Ok(())
    }

    /// Get a job by ID
    pub fn get_by_id(&self, id: Uuid) -> Option<Job> {
        self.repo.find_by_id(id)
    }

    /// List jobs by status
    pub fn get_by_status(&self, status: JobStatus) -> Vec<Job> {
        self.repo.find_by_status(status)
    }

    /// List all jobs
    pub fn get_all(&self) -> Vec<Job> {
        self.repo.list_all()
    }

    /// Per-status totals over one consistent snapshot
    pub fn counts(&self) -> StatusCounts {
        counts_by_status(&self.repo.list_all())
    }

    pub fn len(&self) -> usize {
        self.repo.count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for JobService {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Validation
// =============================================================================

fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        tracing::warn!("Rejected job input: {} is empty", field);
        return Err(JobError::ValidationError(format!("{} is required", field)));
    }
    Ok(())
}

fn normalize_create(req: CreateJob) -> CreateJob {
    CreateJob {
        title: req.title.trim().to_string(),
        company: req.company.trim().to_string(),
        location: non_blank(req.location),
        salary: non_blank(req.salary),
        status: req.status,
        description: non_blank(req.description),
        notes: non_blank(req.notes),
    }
}

fn normalize_update(patch: UpdateJob) -> UpdateJob {
    UpdateJob {
        title: patch.title.map(|t| t.trim().to_string()),
        company: patch.company.map(|c| c.trim().to_string()),
        ..patch
    }
}

fn log_jobs(jobs: &[Job]) {
    tracing::debug!("Current jobs in store: {}", jobs.len());
    for job in jobs {
        tracing::debug!("- {} at {} ({})", job.title, job.company, job.status);
    }
}
