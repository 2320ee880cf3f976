//! Query and aggregation over job snapshots
//!
//! Everything here is a pure function of the slice it is given. Callers
//! obtain a snapshot from the store and derive list and overview data
//! from it without touching the store again.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::domain::job::{Job, JobStatus, ParseStatusError};

/// Status selector for list views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(JobStatus),
}

impl StatusFilter {
    pub fn matches(self, job: &Job) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => job.status == status,
        }
    }
}

impl From<JobStatus> for StatusFilter {
    fn from(status: JobStatus) -> Self {
        StatusFilter::Only(status)
    }
}

impl FromStr for StatusFilter {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

/// Keeps the jobs selected by `filter`, preserving their order
pub fn filter(jobs: &[Job], filter: StatusFilter) -> Vec<Job> {
    match filter {
        StatusFilter::All => jobs.to_vec(),
        StatusFilter::Only(_) => jobs.iter().filter(|job| filter.matches(job)).cloned().collect(),
    }
}

/// Per-status totals for a snapshot
///
/// Every status is present, zero or not, and the per-status counts always
/// add up to `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub by_status: BTreeMap<JobStatus, usize>,
    pub total: usize,
}

impl StatusCounts {
    pub fn get(&self, status: JobStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    /// Counts in workflow order
    pub fn iter(&self) -> impl Iterator<Item = (JobStatus, usize)> + '_ {
        JobStatus::ALL.into_iter().map(|status| (status, self.get(status)))
    }
}

impl Default for StatusCounts {
    fn default() -> Self {
        Self {
            by_status: JobStatus::ALL.into_iter().map(|status| (status, 0)).collect(),
            total: 0,
        }
    }
}

/// Counts the jobs in `jobs` per status
pub fn counts_by_status(jobs: &[Job]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for job in jobs {
        *counts.by_status.entry(job.status).or_insert(0) += 1;
    }
    counts.total = jobs.len();
    counts
}
