//! Catalog records. Shapes follow the backend contract; no invariants are
//! enforced on this side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Work arrangement of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    OnSite,
    Hybrid,
    Remote,
    Internship,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::OnSite,
        JobType::Hybrid,
        JobType::Remote,
        JobType::Internship,
    ];

    /// Value used by the backend.
    pub fn wire_name(&self) -> &'static str {
        match self {
            JobType::OnSite => "presencial",
            JobType::Hybrid => "hibrido",
            JobType::Remote => "remoto",
            JobType::Internship => "estagio",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobType::OnSite => "On-site",
            JobType::Hybrid => "Hybrid",
            JobType::Remote => "Remote",
            JobType::Internship => "Internship",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for JobType {
    type Err = String;

    /// Accepts the backend values as well as the English names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "presencial" | "on_site" | "onsite" | "on-site" => Ok(JobType::OnSite),
            "hibrido" | "híbrido" | "hybrid" => Ok(JobType::Hybrid),
            "remoto" | "remote" => Ok(JobType::Remote),
            "estagio" | "estágio" | "internship" => Ok(JobType::Internship),
            other => Err(format!("unknown job type '{}'", other)),
        }
    }
}

/// A job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub salary: f64,
    /// `None` when the backend sent a type this client does not know.
    pub job_type: Option<JobType>,
    pub positions: u32,
    pub company_id: i64,
    /// Required skills.
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub city: String,
    /// Postal code.
    pub cep: String,
    pub employees: u32,
    /// Years in business.
    pub years: u32,
    pub admin_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewed,
    Accepted,
    Rejected,
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" | "pendente" => Ok(ApplicationStatus::Pending),
            "reviewed" | "em_analise" => Ok(ApplicationStatus::Reviewed),
            "accepted" | "aprovado" | "aceito" => Ok(ApplicationStatus::Accepted),
            "rejected" | "reprovado" | "rejeitado" => Ok(ApplicationStatus::Rejected),
            other => Err(format!("unknown application status '{}'", other)),
        }
    }
}

/// A candidate's application to a posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub job_id: i64,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub applied_at: Option<DateTime<Utc>>,
    /// Embedded posting, when the endpoint returns it.
    #[serde(default)]
    pub job: Option<Job>,
}

/// A skill ("competência") attached to a user or required by a posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
}

/// A candidate as listed to the administrator reviewing a posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// A posting together with everyone who applied to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplicants {
    pub job: Job,
    pub applicants: Vec<Applicant>,
}
