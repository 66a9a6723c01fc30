//! Backend payloads and their mapping to domain types.
//!
//! The backend mixes Portuguese and English field names (`nome`/`name`,
//! `telefone`/`phone`, ...) and sends ids as numbers or strings. Every such
//! variant is reconciled here, once, as data enters the client.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use jobscout_core::catalog::{
    Applicant, Application, ApplicationStatus, Company, Job, JobApplicants, JobType, Skill,
};
use jobscout_core::session::{Profile, Registration, Role};

// ============================================================================
// Flexible scalar decoding
// ============================================================================

/// Accepts a JSON string or number and yields its string form.
pub fn flexible_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

/// Accepts a JSON number or numeric string and yields an integer.
fn flexible_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                    .map(|f| f as i64)
            })
            .ok_or_else(|| serde::de::Error::custom(format!("invalid integer {}", n))),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid integer '{}': {}", s, e))),
        other => Err(serde::de::Error::custom(format!(
            "expected integer, got {}",
            other
        ))),
    }
}

/// Requirements arrive as objects with a `nome`, plain strings, or one
/// comma-separated string.
fn requirement_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                Value::Object(map) => map
                    .get("nome")
                    .or_else(|| map.get("name"))
                    .and_then(Value::as_str)
                    .map(str::to_string),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    })
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

// ============================================================================
// Auth collaborator
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VerifyResponse {
    pub role: String,
}

impl VerifyResponse {
    pub fn into_role(self) -> Result<Role, String> {
        self.role.parse()
    }
}

/// Extracts a displayable message from an error body.
///
/// `detail` may be a plain string or a list of validation entries with a
/// `msg` field.
pub fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

// ============================================================================
// Profile collaborator
// ============================================================================

/// Body of `/users/me` and `/admins/me`.
#[derive(Debug, Deserialize)]
pub struct ProfilePayload {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    #[serde(default, alias = "nome")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, alias = "telefone")]
    pub phone: Option<String>,
    #[serde(default, alias = "area_trabalho", alias = "workArea")]
    pub work_area: Option<String>,
    #[serde(default, alias = "nivel_educacao", alias = "educationLevel")]
    pub education_level: Option<String>,
}

impl From<ProfilePayload> for Profile {
    fn from(payload: ProfilePayload) -> Self {
        Profile {
            id: payload.id,
            name: payload.name.unwrap_or_default(),
            email: payload.email.filter(|e| !e.is_empty()),
            cpf: payload.cpf,
            created_at: payload.created_at,
            phone: payload.phone,
            work_area: payload.work_area,
            education_level: payload.education_level,
        }
    }
}

// ============================================================================
// Registration collaborator
// ============================================================================

#[derive(Debug, Serialize)]
pub struct NewUserPayload {
    pub nome: String,
    pub email: String,
    pub cpf: String,
    pub telefone: String,
    pub area_trabalho: String,
    pub nivel_educacao: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct NewAdminPayload {
    pub nome: String,
    pub email: String,
    pub cpf: String,
    pub telefone: String,
    pub password: String,
}

/// Role-specific account creation body. Missing optional fields are sent as
/// empty strings.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum NewAccountPayload {
    User(NewUserPayload),
    Admin(NewAdminPayload),
}

impl From<&Registration> for NewAccountPayload {
    fn from(registration: &Registration) -> Self {
        let phone = registration.phone.clone().unwrap_or_default();
        match registration.role {
            Role::Admin => NewAccountPayload::Admin(NewAdminPayload {
                nome: registration.name.clone(),
                email: registration.email.clone(),
                cpf: registration.cpf.clone(),
                telefone: phone,
                password: registration.password.clone(),
            }),
            Role::User => NewAccountPayload::User(NewUserPayload {
                nome: registration.name.clone(),
                email: registration.email.clone(),
                cpf: registration.cpf.clone(),
                telefone: phone,
                area_trabalho: registration.work_area.clone().unwrap_or_default(),
                nivel_educacao: registration.education_level.clone().unwrap_or_default(),
                password: registration.password.clone(),
            }),
        }
    }
}

// ============================================================================
// Catalog collaborator
// ============================================================================

/// A posting ("vaga").
#[derive(Debug, Deserialize)]
pub struct JobPayload {
    #[serde(deserialize_with = "flexible_i64")]
    pub id: i64,
    #[serde(alias = "titulo")]
    pub title: String,
    #[serde(default, alias = "descricao")]
    pub description: Option<String>,
    #[serde(default, alias = "salario")]
    pub salary: Option<f64>,
    #[serde(default, alias = "modalidade", alias = "type")]
    pub job_type: Option<String>,
    #[serde(default, alias = "no_vagas")]
    pub positions: Option<u32>,
    #[serde(alias = "empresa_id", alias = "companyId", deserialize_with = "flexible_i64")]
    pub company_id: i64,
    #[serde(default, alias = "competencias", deserialize_with = "requirement_list")]
    pub requirements: Vec<String>,
}

impl From<JobPayload> for Job {
    fn from(payload: JobPayload) -> Self {
        let job_type = payload.job_type.as_deref().and_then(|raw| match raw.parse::<JobType>() {
            Ok(job_type) => Some(job_type),
            Err(e) => {
                tracing::debug!(job_id = payload.id, "Ignoring job type: {}", e);
                None
            }
        });

        Job {
            id: payload.id,
            title: payload.title,
            description: payload.description.unwrap_or_default(),
            salary: payload.salary.unwrap_or_default(),
            job_type,
            positions: payload.positions.unwrap_or(1),
            company_id: payload.company_id,
            requirements: payload.requirements,
        }
    }
}

/// A company ("empresa").
#[derive(Debug, Deserialize)]
pub struct CompanyPayload {
    #[serde(deserialize_with = "flexible_i64")]
    pub id: i64,
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(default, alias = "descricao")]
    pub description: Option<String>,
    #[serde(default, alias = "cidade")]
    pub city: Option<String>,
    #[serde(default)]
    pub cep: Option<String>,
    #[serde(default, alias = "funcionarios", alias = "no_funcionarios")]
    pub employees: Option<u32>,
    #[serde(default, alias = "anos")]
    pub years: Option<u32>,
    #[serde(default)]
    pub admin_id: Option<i64>,
}

impl From<CompanyPayload> for Company {
    fn from(payload: CompanyPayload) -> Self {
        Company {
            id: payload.id,
            name: payload.name,
            description: payload.description.unwrap_or_default(),
            city: payload.city.unwrap_or_default(),
            cep: payload.cep.unwrap_or_default(),
            employees: payload.employees.unwrap_or_default(),
            years: payload.years.unwrap_or_default(),
            admin_id: payload.admin_id.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApplicationRow {
    #[serde(deserialize_with = "flexible_i64")]
    pub id: i64,
    #[serde(alias = "vaga_id", alias = "jobId", deserialize_with = "flexible_i64")]
    pub job_id: i64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "appliedAt", alias = "data_candidatura")]
    pub applied_at: Option<String>,
}

/// Entry of `/users/{id}/applications`: either `{app, job}` or a flat row.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApplicationPayload {
    WithJob { app: ApplicationRow, job: JobPayload },
    Flat(ApplicationRow),
}

impl From<ApplicationPayload> for Application {
    fn from(payload: ApplicationPayload) -> Self {
        let (row, job) = match payload {
            ApplicationPayload::WithJob { app, job } => (app, Some(Job::from(job))),
            ApplicationPayload::Flat(row) => (row, None),
        };

        let status = row
            .status
            .as_deref()
            .and_then(|raw| raw.parse::<ApplicationStatus>().ok())
            .unwrap_or_default();

        Application {
            id: row.id,
            job_id: row.job_id,
            status,
            applied_at: row.applied_at.as_deref().and_then(parse_timestamp),
            job,
        }
    }
}

/// A skill ("competência").
#[derive(Debug, Deserialize)]
pub struct SkillPayload {
    #[serde(deserialize_with = "flexible_i64")]
    pub id: i64,
    #[serde(alias = "nome")]
    pub name: String,
}

impl From<SkillPayload> for Skill {
    fn from(payload: SkillPayload) -> Self {
        Skill {
            id: payload.id,
            name: payload.name,
        }
    }
}

/// A candidate listed under a posting in the administrator's overview.
#[derive(Debug, Deserialize)]
pub struct ApplicantPayload {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    #[serde(default, alias = "nome")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<ApplicantPayload> for Applicant {
    fn from(payload: ApplicantPayload) -> Self {
        Applicant {
            id: payload.id,
            name: payload.name.unwrap_or_default(),
            email: payload.email.unwrap_or_default(),
        }
    }
}

/// Entry of `/vagas/admin-with-applications`: the posting's own fields plus
/// a `users` list.
#[derive(Debug, Deserialize)]
pub struct AdminJobPayload {
    #[serde(flatten)]
    pub job: JobPayload,
    #[serde(default, alias = "candidatos")]
    pub users: Vec<ApplicantPayload>,
}

impl From<AdminJobPayload> for JobApplicants {
    fn from(payload: AdminJobPayload) -> Self {
        JobApplicants {
            job: payload.job.into(),
            applicants: payload.users.into_iter().map(Applicant::from).collect(),
        }
    }
}
