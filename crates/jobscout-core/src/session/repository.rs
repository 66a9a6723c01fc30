//! Session repository trait.

use crate::error::Result;

use super::model::Session;

/// Durable persistence of the single current session.
///
/// Implementations hold at most one session at a time.
pub trait SessionRepository: Send + Sync {
    /// Reads the persisted session. `Ok(None)` when nothing is stored.
    fn load(&self) -> Result<Option<Session>>;

    /// Replaces the persisted session.
    fn save(&self, session: &Session) -> Result<()>;

    /// Removes the persisted session. Succeeds when nothing is stored.
    fn clear(&self) -> Result<()>;
}
