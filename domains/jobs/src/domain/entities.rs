//! Job entities

use jobscout_views::JobCard;
use serde::Serialize;
use sqlx::FromRow;

/// A job posting loaded by the external importer.
///
/// `id` is the local insertion order; `job_id` is the external identifier
/// that saved jobs refer to.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Job {
    pub id: i64,
    pub job_id: i64,
    pub title: String,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub remote_allowed: bool,
    pub experience_level: Option<String>,
    pub skills_desc: Option<String>,
}

impl Job {
    /// View model for listings; `saved` marks the bookmark toggle.
    pub fn into_card(self, saved: bool) -> JobCard {
        JobCard {
            job_id: self.job_id,
            title: self.title,
            company_name: self.company_name.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            remote_allowed: self.remote_allowed,
            experience_level: self.experience_level.unwrap_or_default(),
            skills_desc: self.skills_desc.unwrap_or_default(),
            saved,
        }
    }
}

/// A user's bookmark of an external job id
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct SavedJob {
    pub id: i64,
    pub job_id: i64,
    pub user_id: i64,
}

#[cfg(test)]
pub(crate) fn sample_job(id: i64, job_id: i64) -> Job {
    Job {
        id,
        job_id,
        title: format!("Job {}", job_id),
        company_name: Some("Acme".to_string()),
        location: None,
        remote_allowed: false,
        experience_level: Some("Entry level".to_string()),
        skills_desc: None,
    }
}
