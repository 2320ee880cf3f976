//! Job domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// A tracked job application
///
/// Records are created, mutated and destroyed only by the store. `id` and
/// `date` are assigned at creation and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub status: JobStatus,
    /// When the application was recorded
    pub date: DateTime<Utc>,
    pub interview_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub notes: Option<String>,
}

/// Application status
///
/// The declaration order is the canonical workflow order used by
/// [`JobStatus::next`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Applied,
    Interviewing,
    Offered,
    Rejected,
    Withdrawn,
}

impl JobStatus {
    /// Every status, in workflow order
    pub const ALL: [JobStatus; 5] = [
        JobStatus::Applied,
        JobStatus::Interviewing,
        JobStatus::Offered,
        JobStatus::Rejected,
        JobStatus::Withdrawn,
    ];

    /// Returns the status that follows `self`, wrapping from `Withdrawn`
    /// back to `Applied`.
    pub fn next(self) -> JobStatus {
        match self {
            JobStatus::Applied => JobStatus::Interviewing,
            JobStatus::Interviewing => JobStatus::Offered,
            JobStatus::Offered => JobStatus::Rejected,
            JobStatus::Rejected => JobStatus::Withdrawn,
            JobStatus::Withdrawn => JobStatus::Applied,
        }
    }

    /// Lowercase name, identical to the serialized form
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Applied => "applied",
            JobStatus::Interviewing => "interviewing",
            JobStatus::Offered => "offered",
            JobStatus::Rejected => "rejected",
            JobStatus::Withdrawn => "withdrawn",
        }
    }

    /// Human-facing label for overview screens
    pub fn label(self) -> &'static str {
        match self {
            JobStatus::Applied => "Applied",
            JobStatus::Interviewing => "Interviewing",
            JobStatus::Offered => "Offers",
            JobStatus::Rejected => "Rejected",
            JobStatus::Withdrawn => "Withdrawn",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the five status names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown job status '{0}' (expected applied, interviewing, offered, rejected or withdrawn)")]
pub struct ParseStatusError(pub String);

impl FromStr for JobStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}
