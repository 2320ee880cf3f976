//! Job DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::job::{Job, JobStatus};

/// Request to record a new job application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateJob {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    /// Initial status, `Applied` when omitted
    #[serde(default)]
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CreateJob {
    pub fn new(title: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = Some(salary.into());
        self
    }
}

/// Partial update of an existing job
///
/// Only fields set to `Some` are written. There are no `id` or `date`
/// fields, so those keys are ignored when a patch is deserialized.
/// An optional text field supplied as a blank string clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateJob {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub status: Option<JobStatus>,
    #[serde(default)]
    pub interview_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl UpdateJob {
    /// Patch that only changes the status
    pub fn status(status: JobStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// True when the patch would not change anything
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Writes the supplied fields onto `job`
    pub fn apply_to(self, job: &mut Job) {
        if let Some(title) = self.title {
            job.title = title;
        }
        if let Some(company) = self.company {
            job.company = company;
        }
        if let Some(location) = self.location {
            job.location = non_blank(Some(location));
        }
        if let Some(salary) = self.salary {
            job.salary = non_blank(Some(salary));
        }
        if let Some(status) = self.status {
            job.status = status;
        }
        if let Some(interview_date) = self.interview_date {
            job.interview_date = Some(interview_date);
        }
        if let Some(description) = self.description {
            job.description = non_blank(Some(description));
        }
        if let Some(notes) = self.notes {
            job.notes = non_blank(Some(notes));
        }
    }
}

/// Collapses blank optional text to `None`
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
