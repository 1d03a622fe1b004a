//! Template structs for every rendered page

use askama::Template;
use jobscout_common::{Page, PageLink};

use crate::flash::FlashView;

/// One job listing as shown in tables and sidebars
#[derive(Debug, Clone, PartialEq)]
pub struct JobCard {
    pub job_id: i64,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub remote_allowed: bool,
    pub experience_level: String,
    pub skills_desc: String,
    pub saved: bool,
}

/// Echo of the search form so the dashboard keeps the user's input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFormView {
    pub skill: String,
    pub location: String,
    pub job_type: String,
    pub experience: String,
}

/// Pagination strip for a listing
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationView {
    pub base_path: String,
    pub query: String,
    pub page: u32,
    pub pages: u32,
    pub total: i64,
    pub has_prev: bool,
    pub has_next: bool,
    pub prev_num: u32,
    pub next_num: u32,
    pub links: Vec<PageLink>,
}

impl PaginationView {
    /// `query` is appended verbatim (without the leading `?`) to every link.
    pub fn from_page<T>(page: &Page<T>, base_path: &str, query: String) -> Self {
        Self {
            base_path: base_path.to_string(),
            query,
            page: page.page,
            pages: page.pages(),
            total: page.total,
            has_prev: page.has_prev(),
            has_next: page.has_next(),
            prev_num: page.prev_num().unwrap_or(0),
            next_num: page.next_num().unwrap_or(0),
            links: page.links(),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub top_jobs: Vec<JobCard>,
    pub logged_in: bool,
}

#[derive(Template)]
#[template(path = "signup.html")]
pub struct SignupPage {
    pub flash: Option<FlashView>,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub flash: Option<FlashView>,
}

#[derive(Template)]
#[template(path = "services.html")]
pub struct ServicesPage {
    pub logged_in: bool,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub flash: Option<FlashView>,
    pub user_email: String,
    pub skills: String,
    pub active_section: String,
    pub profile: bool,
    pub search: SearchFormView,
    pub jobs: Vec<JobCard>,
    pub no_jobs: bool,
    pub saved_jobs: Vec<JobCard>,
    pub pagination: Option<PaginationView>,
}

#[derive(Template)]
#[template(path = "saved_jobs.html")]
pub struct SavedJobsPage {
    pub saved_jobs: Vec<JobCard>,
    pub pagination: PaginationView,
}
