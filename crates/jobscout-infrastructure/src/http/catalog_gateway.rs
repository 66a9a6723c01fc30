//! Main API client for postings, companies and applications.

use async_trait::async_trait;
use reqwest::Client;

use jobscout_core::catalog::{Application, CatalogGateway, Company, Job, JobApplicants, Skill};
use jobscout_core::config::RootConfig;
use jobscout_core::session::GatewayError;

use super::client::{bearer, build_client, endpoint, ensure_success, read_json, transport_error};
use crate::dto::wire::{
    AdminJobPayload, ApplicationPayload, CompanyPayload, JobPayload, SkillPayload,
};

/// [`CatalogGateway`] over `{api_url}`.
#[derive(Clone)]
pub struct HttpCatalogGateway {
    client: Client,
    base_url: String,
}

impl HttpCatalogGateway {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &RootConfig) -> Result<Self, GatewayError> {
        Ok(Self::new(build_client(&config.http)?, config.api.api_base()))
    }

    async fn get_list<P, T>(
        &self,
        path: &str,
        token: Option<&str>,
        fallback: &str,
    ) -> Result<Vec<T>, GatewayError>
    where
        P: serde::de::DeserializeOwned + Into<T>,
    {
        let url = endpoint(&self.base_url, path);
        tracing::debug!("GET {}", url);

        let mut request = self.client.get(&url);
        if let Some(token) = token {
            request = request.header("Authorization", bearer(token));
        }
        let response = request.send().await.map_err(transport_error)?;
        let payloads: Vec<P> = read_json(response, fallback).await?;
        Ok(payloads.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl CatalogGateway for HttpCatalogGateway {
    async fn list_jobs(&self) -> Result<Vec<Job>, GatewayError> {
        self.get_list::<JobPayload, Job>("/vagas", None, "Failed to load jobs")
            .await
    }

    async fn list_companies(&self) -> Result<Vec<Company>, GatewayError> {
        self.get_list::<CompanyPayload, Company>("/empresas", None, "Failed to load companies")
            .await
    }

    async fn list_user_applications(&self, user_id: &str) -> Result<Vec<Application>, GatewayError> {
        self.get_list::<ApplicationPayload, Application>(
            &format!("/users/{}/applications", user_id),
            None,
            "Failed to load applications",
        )
        .await
    }

    async fn list_user_skills(&self, user_id: &str) -> Result<Vec<Skill>, GatewayError> {
        self.get_list::<SkillPayload, Skill>(
            &format!("/users/{}/competencias", user_id),
            None,
            "Failed to load skills",
        )
        .await
    }

    async fn apply(&self, job_id: i64, user_id: &str, token: &str) -> Result<(), GatewayError> {
        let url = endpoint(&self.base_url, &format!("/vagas/{}/apply/{}", job_id, user_id));
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", bearer(token))
            .send()
            .await
            .map_err(transport_error)?;

        ensure_success(response, "Failed to apply for job").await?;
        Ok(())
    }

    async fn list_admin_applications(&self, token: &str) -> Result<Vec<JobApplicants>, GatewayError> {
        self.get_list::<AdminJobPayload, JobApplicants>(
            "/vagas/admin-with-applications",
            Some(token),
            "Failed to load applications",
        )
        .await
    }
}
