//! Job Repository
//!
//! Holds the job collection in insertion order. Each method takes the lock
//! once, so no caller can observe a half-applied mutation and writes are
//! serialized.

use jobby_core::domain::job::{Job, JobStatus};
use jobby_core::dto::job::{CreateJob, UpdateJob};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// Storage operations for job records
pub trait JobRepository: Send + Sync {
    /// Stores a new job built from `req`
    ///
    /// Assigns a fresh id and the current time as the applied date, and
    /// appends the record at the end of the collection.
    fn create(&self, req: CreateJob) -> Job;

    /// Finds a job by ID
    fn find_by_id(&self, id: Uuid) -> Option<Job>;

    /// Finds jobs with the given status, in insertion order
    fn find_by_status(&self, status: JobStatus) -> Vec<Job>;

    /// Returns every job, in insertion order
    fn list_all(&self) -> Vec<Job>;

    /// Applies `patch` to the job in place
    ///
    /// Returns the updated job, or `None` when no job has this ID.
    fn update(&self, id: Uuid, patch: UpdateJob) -> Option<Job>;

    /// Sets the job's status only if it still equals `expected`
    ///
    /// Returns `None` when no job has this ID, or `Some(Err(current))` with
    /// the stored status when it no longer matches; the job is then left
    /// untouched.
    fn update_status_if(
        &self,
        id: Uuid,
        expected: JobStatus,
        status: JobStatus,
    ) -> Option<Result<Job, JobStatus>>;

    /// Deletes a job by ID
    ///
    /// Returns whether a job was removed.
    fn delete(&self, id: Uuid) -> bool;

    /// Number of stored jobs
    fn count(&self) -> usize;
}

/// In-memory implementation of JobRepository
///
/// Readers get clones; the vector itself never leaves the lock.
#[derive(Debug, Default)]
pub struct InMemoryJobRepository {
    jobs: RwLock<Vec<Job>>,
}

impl InMemoryJobRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation completes before a panic could occur, so a poisoned
    // lock still guards a consistent vector.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Job>> {
        self.jobs.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Job>> {
        self.jobs.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl JobRepository for InMemoryJobRepository {
    fn create(&self, req: CreateJob) -> Job {
        let mut jobs = self.write();

        let mut id = Uuid::new_v4();
        while jobs.iter().any(|job| job.id == id) {
            id = Uuid::new_v4();
        }

        let job = Job {
            id,
            title: req.title,
            company: req.company,
            location: req.location,
            salary: req.salary,
            status: req.status.unwrap_or_default(),
            date: chrono::Utc::now(),
            interview_date: None,
            description: req.description,
            notes: req.notes,
        };

        jobs.push(job.clone());
        job
    }

    fn find_by_id(&self, id: Uuid) -> Option<Job> {
        self.read().iter().find(|job| job.id == id).cloned()
    }

    fn find_by_status(&self, status: JobStatus) -> Vec<Job> {
        self.read()
            .iter()
            .filter(|job| job.status == status)
            .cloned()
            .collect()
    }

    fn list_all(&self) -> Vec<Job> {
        self.read().clone()
    }

    fn update(&self, id: Uuid, patch: UpdateJob) -> Option<Job> {
        let mut jobs = self.write();
        let job = jobs.iter_mut().find(|job| job.id == id)?;
        patch.apply_to(job);
        Some(job.clone())
    }

    fn update_status_if(
        &self,
        id: Uuid,
        expected: JobStatus,
        status: JobStatus,
    ) -> Option<Result<Job, JobStatus>> {
        let mut jobs = self.write();
        let job = jobs.iter_mut().find(|job| job.id == id)?;
        if job.status != expected {
            return Some(Err(job.status));
        }
        job.status = status;
        Some(Ok(job.clone()))
    }

    fn delete(&self, id: Uuid) -> bool {
        let mut jobs = self.write();
        let before = jobs.len();
        // `retain` keeps survivors in their original order
        jobs.retain(|job| job.id != id);
        jobs.len() < before
    }

    fn count(&self) -> usize {
        self.read().len()
    }
}
