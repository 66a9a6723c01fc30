//! Session domain module.
//!
//! The authenticated identity for the current storage scope, the ports the
//! session store talks through, and the errors it surfaces.
//!
//! # Module Structure
//!
//! - `model`: `Session`, `Role`, `Profile`, `SessionPatch`, `SessionState`
//! - `credentials`: login and registration inputs
//! - `gateway`: traits for the auth, profile and registration collaborators
//! - `repository`: durable persistence of the single current session
//! - `error`: user-facing session errors

mod credentials;
mod error;
mod gateway;
mod model;
mod repository;

// Re-export public API
pub use credentials::{Credentials, Registration};
pub use error::SessionError;
pub use gateway::{AuthGateway, GatewayError, ProfileGateway, RegistrationGateway};
pub use model::{Profile, Role, Session, SessionPatch, SessionState};
pub use repository::SessionRepository;

/// Well-known storage key the current session is persisted under.
pub const SESSION_STORAGE_KEY: &str = "currentUser";
