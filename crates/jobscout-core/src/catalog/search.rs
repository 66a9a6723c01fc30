//! Client-side filtering over an in-memory list of postings.

use super::model::{Company, Job, JobType};

/// Shown when a posting references a company missing from the list.
pub const UNKNOWN_COMPANY: &str = "Unknown company";

/// Restriction on the work arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(JobType),
}

/// Free-text query plus type restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub query: String,
    pub job_type: TypeFilter,
}

impl JobFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_type(mut self, job_type: JobType) -> Self {
        self.job_type = TypeFilter::Only(job_type);
        self
    }

    /// A job matches when the query is empty or found (case-insensitively) in
    /// its title, description, any requirement or its company name, and the
    /// type restriction accepts it.
    pub fn matches(&self, job: &Job, company_name: &str) -> bool {
        self.matches_type(job) && self.matches_query(job, company_name)
    }

    fn matches_type(&self, job: &Job) -> bool {
        match self.job_type {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => job.job_type == Some(wanted),
        }
    }

    fn matches_query(&self, job: &Job, company_name: &str) -> bool {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

        contains(&job.title)
            || contains(&job.description)
            || job.requirements.iter().any(|req| contains(req))
            || contains(company_name)
    }
}

/// Name of the company with `company_id`, or [`UNKNOWN_COMPANY`].
pub fn company_name(companies: &[Company], company_id: i64) -> &str {
    companies
        .iter()
        .find(|c| c.id == company_id)
        .map(|c| c.name.as_str())
        .unwrap_or(UNKNOWN_COMPANY)
}

/// Returns the jobs accepted by `filter`, in their original order.
pub fn filter_jobs<'a>(jobs: &'a [Job], companies: &[Company], filter: &JobFilter) -> Vec<&'a Job> {
    jobs.iter()
        .filter(|job| filter.matches(job, company_name(companies, job.company_id)))
        .collect()
}
