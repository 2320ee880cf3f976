//! Status draft
//!
//! Lets a detail view cycle a job's status locally, previewing each step,
//! and write the final value back through the service exactly once when
//! the view is confirmed. Dropping the draft discards the local value.

use jobby_core::domain::job::{Job, JobStatus};
use uuid::Uuid;

use super::job::{JobError, JobService, Result};

/// Uncommitted status for one job
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a draft does nothing until it is committed"]
pub struct StatusDraft {
    job_id: Uuid,
    committed: JobStatus,
    pending: JobStatus,
}

impl StatusDraft {
    /// Starts a draft from the job's stored status
    pub fn open(service: &JobService, job_id: Uuid) -> Result<Self> {
        let job = service
            .get_by_id(job_id)
            .ok_or(JobError::NotFound(job_id))?;

        Ok(Self {
            job_id,
            committed: job.status,
            pending: job.status,
        })
    }

    /// Moves the local status one step along the workflow
    pub fn advance(&mut self) -> JobStatus {
        self.pending = self.pending.next();
        self.pending
    }

    pub fn job_id(&self) -> Uuid {
        self.job_id
    }

    pub fn pending(&self) -> JobStatus {
        self.pending
    }

    /// Status the job had when the draft was opened
    pub fn committed(&self) -> JobStatus {
        self.committed
    }

    pub fn is_changed(&self) -> bool {
        self.pending != self.committed
    }

    /// Writes the pending status back to the store
    ///
    /// An unchanged draft writes nothing. If the job's status was changed by
    /// someone else since the draft was opened, the stored value wins and
    /// this fails with [`JobError::StatusChanged`].
    pub fn commit(self, service: &JobService) -> Result<Job> {
        if !self.is_changed() {
            return service
                .get_by_id(self.job_id)
                .ok_or(JobError::NotFound(self.job_id));
        }

        tracing::debug!(
            "Committing status draft for job {}: {} -> {}",
            self.job_id,
            self.committed,
            self.pending
        );
        service.update_status_from(self.job_id, self.committed, self.pending)
    }
}
