//! Ports to the external auth, profile and registration collaborators.

use async_trait::async_trait;
use thiserror::Error;

use super::credentials::{Credentials, Registration};
use super::model::{Profile, Role};

/// Failure reported by a collaborator call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The collaborator answered with a non-success status.
    #[error("{message} (status {status})")]
    Rejected { status: u16, message: String },

    /// The request never completed.
    #[error("{0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("{0}")]
    Decode(String),
}

impl GatewayError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// The human-readable part, without status decoration.
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected { message, .. } => message,
            Self::Transport(message) | Self::Decode(message) => message,
        }
    }
}

/// Token issuance and verification.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchanges credentials for a bearer token.
    async fn issue_token(&self, credentials: &Credentials) -> Result<String, GatewayError>;

    /// Returns the role associated with `token`.
    async fn verify_token(&self, token: &str) -> Result<Role, GatewayError>;
}

/// Role-specific "me" lookup.
#[async_trait]
pub trait ProfileGateway: Send + Sync {
    async fn fetch_profile(&self, role: Role, token: &str) -> Result<Profile, GatewayError>;
}

/// Role-specific account creation.
#[async_trait]
pub trait RegistrationGateway: Send + Sync {
    async fn create_account(&self, registration: &Registration) -> Result<(), GatewayError>;
}
