//! Job search filters
//!
//! Normalizes the dashboard search form and turns it into SQL predicates.
//! Every present filter is ANDed onto a query that already ends in a
//! `WHERE` clause.

use jobscout_common::db::escape_like;
use sqlx::{Postgres, QueryBuilder};
use url::form_urlencoded;

/// Experience choice that disables the experience filter
pub const ALL_EXPERIENCE_LEVELS: &str = "all experience levels";

/// Job type value that selects remote jobs; any other non-empty value
/// selects on-site jobs.
pub const REMOTE: &str = "remote";

/// Normalized search filters; `None` means the filter is not applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobSearch {
    pub skill: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub experience: Option<String>,
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

impl JobSearch {
    /// Build filters from raw form input.
    ///
    /// All values are trimmed; skill and location are lower-cased. The
    /// "all experience levels" choice (any case) means no experience filter.
    pub fn new(skill: &str, location: &str, job_type: &str, experience: &str) -> Self {
        let experience = experience.trim();
        let experience = if experience.eq_ignore_ascii_case(ALL_EXPERIENCE_LEVELS) {
            String::new()
        } else {
            experience.to_string()
        };

        Self {
            skill: non_empty(skill.trim().to_lowercase()),
            location: non_empty(location.trim().to_lowercase()),
            job_type: non_empty(job_type.trim().to_string()),
            experience: non_empty(experience),
        }
    }

    /// Whether the job type filter selects remote jobs
    pub fn remote(&self) -> Option<bool> {
        self.job_type.as_deref().map(|t| t == REMOTE)
    }

    /// Append ` AND ...` predicates for every active filter.
    pub fn push_filters(&self, query: &mut QueryBuilder<'_, Postgres>) {
        if let Some(skill) = &self.skill {
            query
                .push(" AND skills_desc ILIKE ")
                .push_bind(contains_pattern(skill));
        }
        if let Some(location) = &self.location {
            query
                .push(" AND location ILIKE ")
                .push_bind(contains_pattern(location));
        }
        if let Some(remote) = self.remote() {
            query.push(" AND remote_allowed = ").push_bind(remote);
        }
        if let Some(experience) = &self.experience {
            query
                .push(" AND LOWER(experience_level) = LOWER(")
                .push_bind(experience.clone())
                .push(")");
        }
    }

    /// The filters as URL query parameters, so pagination links keep them.
    pub fn to_query_string(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        let fields = [
            ("skill", &self.skill),
            ("location", &self.location),
            ("job_type", &self.job_type),
            ("experience", &self.experience),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                query.append_pair(key, value);
            }
        }
        query.finish()
    }
}

/// `ILIKE` pattern matching `needle` anywhere, with LIKE metacharacters
/// in the needle taken literally.
pub fn contains_pattern(needle: &str) -> String {
    format!("%{}%", escape_like(needle))
}
