//! Errors surfaced by session store operations.

use thiserror::Error;

use super::gateway::GatewayError;
use crate::error::JobScoutError;

/// Failures of login, registration and session mutation.
///
/// Messages reported by the backend are carried through unchanged so they
/// can be shown to the user as is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The auth collaborator rejected the credentials or the issued token.
    #[error("{0}")]
    Authentication(String),

    /// A token was issued but the profile lookup failed.
    #[error("{0}")]
    ProfileFetch(String),

    /// Account creation was rejected (e.g. the email is already taken).
    #[error("{0}")]
    Registration(String),

    /// A collaborator could not be reached or answered with garbage.
    #[error("Network error: {0}")]
    Network(String),

    /// The operation needs an active session and there is none.
    #[error("No active session")]
    NotAuthenticated,

    /// Writing to durable storage failed; the previous state is kept.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SessionError {
    /// Maps a failure of the token issuance or verification step.
    pub fn from_auth(err: GatewayError) -> Self {
        match err {
            GatewayError::Rejected { message, .. } => Self::Authentication(message),
            GatewayError::Transport(message) | GatewayError::Decode(message) => {
                Self::Network(message)
            }
        }
    }

    /// Maps a failure of the profile lookup step.
    ///
    /// Any failure after a token was issued is a profile failure, including
    /// transport errors.
    pub fn from_profile(err: GatewayError) -> Self {
        Self::ProfileFetch(err.message().to_string())
    }

    /// Maps a failure of the account creation step.
    pub fn from_registration(err: GatewayError) -> Self {
        match err {
            GatewayError::Rejected { message, .. } => Self::Registration(message),
            GatewayError::Transport(message) | GatewayError::Decode(message) => {
                Self::Network(message)
            }
        }
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }

    pub fn is_profile_fetch(&self) -> bool {
        matches!(self, Self::ProfileFetch(_))
    }

    pub fn is_registration(&self) -> bool {
        matches!(self, Self::Registration(_))
    }
}

impl From<JobScoutError> for SessionError {
    fn from(err: JobScoutError) -> Self {
        Self::Storage(err.to_string())
    }
}
