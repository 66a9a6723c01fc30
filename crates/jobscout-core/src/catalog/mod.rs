//! Job board catalog: postings, companies and applications as mirrored from
//! the backend, plus client-side search over them.

mod gateway;
mod model;
mod search;

pub use gateway::CatalogGateway;
pub use model::{
    Applicant, Application, ApplicationStatus, Company, Job, JobApplicants, JobType, Skill,
};
pub use search::{JobFilter, TypeFilter, UNKNOWN_COMPANY, company_name, filter_jobs};
