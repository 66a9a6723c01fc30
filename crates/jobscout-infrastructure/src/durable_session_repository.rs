//! SessionRepository backed by a [`DurableStorage`] key.

use std::sync::Arc;

use jobscout_core::error::Result;
use jobscout_core::session::{SESSION_STORAGE_KEY, Session, SessionRepository};

use crate::dto::{decode_session, encode_session};
use crate::storage::DurableStorage;

/// Persists the current session as one versioned JSON record.
///
/// Unreadable or malformed records load as "no session". Write and clear
/// failures are returned to the caller.
pub struct DurableSessionRepository {
    storage: Arc<dyn DurableStorage>,
    key: String,
}

impl DurableSessionRepository {
    /// Creates a repository under the default `currentUser` key.
    pub fn new(storage: Arc<dyn DurableStorage>) -> Self {
        Self::with_key(storage, SESSION_STORAGE_KEY)
    }

    pub fn with_key(storage: Arc<dyn DurableStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl SessionRepository for DurableSessionRepository {
    fn load(&self) -> Result<Option<Session>> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(None),
            Err(e) => {
                tracing::warn!("Failed to read stored session '{}': {}", self.key, e);
                return Ok(None);
            }
        };

        match decode_session(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                tracing::warn!("Ignoring malformed stored session '{}': {}", self.key, e);
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> Result<()> {
        let json = encode_session(session)?;
        self.storage.set_item(&self.key, &json)?;
        tracing::debug!("Saved session for user {}", session.id);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.storage.remove_item(&self.key)
    }
}
