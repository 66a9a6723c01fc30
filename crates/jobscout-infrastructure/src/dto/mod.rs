//! Data transfer objects.
//!
//! - `session`: versioned layout of the persisted session
//! - `wire`: backend payloads and their mapping to domain types

pub mod session;
pub mod wire;

pub use session::{SESSION_ENTITY, SessionDTO, create_session_migrator, decode_session, encode_session};
