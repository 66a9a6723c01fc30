//! Job search and applications for the signed-in candidate.

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use jobscout_core::catalog::{
    Application, CatalogGateway, Job, JobApplicants, JobFilter, Skill, company_name, filter_jobs,
};
use jobscout_core::session::{GatewayError, Role, Session};

use crate::session::SessionStore;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobSearchError {
    #[error("No active session")]
    NotAuthenticated,

    #[error("Administrator access required")]
    NotAdmin,

    #[error("{}", .0.message())]
    Backend(#[from] GatewayError),
}

/// One row of the search results.
#[derive(Debug, Clone, PartialEq)]
pub struct JobListing {
    pub job: Job,
    /// Owning company's name, or `"Unknown company"`.
    pub company_name: String,
    pub already_applied: bool,
    /// Requirements the signed-in user already lists as skills.
    pub matched_requirements: Vec<String>,
}

pub struct JobSearchService {
    store: Arc<SessionStore>,
    catalog: Arc<dyn CatalogGateway>,
}

impl JobSearchService {
    pub fn new(store: Arc<SessionStore>, catalog: Arc<dyn CatalogGateway>) -> Self {
        Self { store, catalog }
    }

    /// Lists the postings matching `filter`.
    ///
    /// With an active session the user's applications and skills are fetched
    /// too, to flag postings already applied to and requirements already met.
    /// Anonymous searches skip both calls.
    pub async fn search(&self, filter: &JobFilter) -> Result<Vec<JobListing>, JobSearchError> {
        let jobs = self.catalog.list_jobs().await?;
        let companies = self.catalog.list_companies().await?;

        let (applied, skills): (HashSet<i64>, HashSet<String>) = match self.store.current_session() {
            Some(session) => {
                let applied = self
                    .catalog
                    .list_user_applications(&session.id)
                    .await?
                    .into_iter()
                    .map(|application| application.job_id)
                    .collect();
                let skills = self
                    .catalog
                    .list_user_skills(&session.id)
                    .await?
                    .into_iter()
                    .map(|skill| skill.name.trim().to_lowercase())
                    .collect();
                (applied, skills)
            }
            None => (HashSet::new(), HashSet::new()),
        };

        let listings: Vec<JobListing> = filter_jobs(&jobs, &companies, filter)
            .into_iter()
            .map(|job| JobListing {
                job: job.clone(),
                company_name: company_name(&companies, job.company_id).to_string(),
                already_applied: applied.contains(&job.id),
                matched_requirements: job
                    .requirements
                    .iter()
                    .filter(|req| skills.contains(&req.trim().to_lowercase()))
                    .cloned()
                    .collect(),
            })
            .collect();

        tracing::debug!("Search matched {} of {} jobs", listings.len(), jobs.len());
        Ok(listings)
    }

    /// Applies the current user to `job_id`.
    pub async fn apply(&self, job_id: i64) -> Result<(), JobSearchError> {
        let session = self.require_session()?;
        self.catalog
            .apply(job_id, &session.id, &session.token)
            .await?;
        tracing::info!("User {} applied to job {}", session.id, job_id);
        Ok(())
    }

    pub async fn applications(&self) -> Result<Vec<Application>, JobSearchError> {
        let session = self.require_session()?;
        Ok(self.catalog.list_user_applications(&session.id).await?)
    }

    pub async fn skills(&self) -> Result<Vec<Skill>, JobSearchError> {
        let session = self.require_session()?;
        Ok(self.catalog.list_user_skills(&session.id).await?)
    }

    /// Postings with their applicants, for a signed-in administrator.
    pub async fn admin_applications(&self) -> Result<Vec<JobApplicants>, JobSearchError> {
        let session = self.require_session()?;
        if session.role != Role::Admin {
            return Err(JobSearchError::NotAdmin);
        }
        Ok(self.catalog.list_admin_applications(&session.token).await?)
    }

    fn require_session(&self) -> Result<Session, JobSearchError> {
        self.store
            .current_session()
            .ok_or(JobSearchError::NotAuthenticated)
    }
}
