//! Auth service client: token issuance and verification.

use async_trait::async_trait;
use reqwest::Client;

use jobscout_core::config::RootConfig;
use jobscout_core::session::{AuthGateway, Credentials, GatewayError, Role};

use super::client::{build_client, endpoint, read_json, transport_error};
use crate::dto::wire::{TokenResponse, VerifyResponse};

const LOGIN_FAILED: &str = "Login failed";
const VERIFY_FAILED: &str = "Failed to verify token";

/// [`AuthGateway`] over `{auth_url}/auth/*`.
#[derive(Clone)]
pub struct HttpAuthGateway {
    client: Client,
    base_url: String,
}

impl HttpAuthGateway {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &RootConfig) -> Result<Self, GatewayError> {
        Ok(Self::new(build_client(&config.http)?, config.api.auth_base()))
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn issue_token(&self, credentials: &Credentials) -> Result<String, GatewayError> {
        let url = endpoint(&self.base_url, "/auth/token");
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .form(&[
                ("username", credentials.email.as_str()),
                ("password", credentials.password.as_str()),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let token: TokenResponse = read_json(response, LOGIN_FAILED).await?;
        Ok(token.access_token)
    }

    async fn verify_token(&self, token: &str) -> Result<Role, GatewayError> {
        let url = endpoint(&self.base_url, "/auth/verify");
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("token", token)])
            .send()
            .await
            .map_err(transport_error)?;

        let verified: VerifyResponse = read_json(response, VERIFY_FAILED).await?;
        verified.into_role().map_err(GatewayError::Decode)
    }
}
