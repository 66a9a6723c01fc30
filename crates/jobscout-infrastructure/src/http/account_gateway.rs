//! Main API client for the account endpoints (`/users`, `/admins`).

use async_trait::async_trait;
use reqwest::Client;

use jobscout_core::config::RootConfig;
use jobscout_core::session::{
    GatewayError, Profile, ProfileGateway, Registration, RegistrationGateway, Role,
};

use super::client::{bearer, build_client, endpoint, ensure_success, read_json, transport_error};
use crate::dto::wire::{NewAccountPayload, ProfilePayload};

const PROFILE_FAILED: &str = "Failed to load user profile";
const REGISTER_FAILED: &str = "Failed to register user";

/// Collection path of each role's accounts.
fn accounts_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admins",
        Role::User => "/users",
    }
}

/// Profile lookup and account creation against `{api_url}`.
#[derive(Clone)]
pub struct HttpAccountGateway {
    client: Client,
    base_url: String,
}

impl HttpAccountGateway {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &RootConfig) -> Result<Self, GatewayError> {
        Ok(Self::new(build_client(&config.http)?, config.api.api_base()))
    }
}

#[async_trait]
impl ProfileGateway for HttpAccountGateway {
    async fn fetch_profile(&self, role: Role, token: &str) -> Result<Profile, GatewayError> {
        let url = endpoint(&self.base_url, &format!("{}/me", accounts_path(role)));
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", bearer(token))
            .send()
            .await
            .map_err(transport_error)?;

        let payload: ProfilePayload = read_json(response, PROFILE_FAILED).await?;
        Ok(payload.into())
    }
}

#[async_trait]
impl RegistrationGateway for HttpAccountGateway {
    async fn create_account(&self, registration: &Registration) -> Result<(), GatewayError> {
        let url = endpoint(&self.base_url, &format!("{}/", accounts_path(registration.role)));
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&NewAccountPayload::from(registration))
            .send()
            .await
            .map_err(transport_error)?;

        ensure_success(response, REGISTER_FAILED).await?;
        Ok(())
    }
}
