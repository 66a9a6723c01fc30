//! Port to the job board backend.

use async_trait::async_trait;

use super::model::{Application, Company, Job, JobApplicants, Skill};
use crate::session::GatewayError;

/// Read access to postings and companies, the candidate's application
/// actions and the administrator's applicant overview.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn list_jobs(&self) -> Result<Vec<Job>, GatewayError>;

    async fn list_companies(&self) -> Result<Vec<Company>, GatewayError>;

    async fn list_user_applications(&self, user_id: &str) -> Result<Vec<Application>, GatewayError>;

    async fn list_user_skills(&self, user_id: &str) -> Result<Vec<Skill>, GatewayError>;

    /// Applies `user_id` to `job_id`. `token` is sent as bearer credential.
    async fn apply(&self, job_id: i64, user_id: &str, token: &str) -> Result<(), GatewayError>;

    /// Every posting visible to the administrator owning `token`, with its
    /// applicants.
    async fn list_admin_applications(&self, token: &str) -> Result<Vec<JobApplicants>, GatewayError>;
}
