//! Persisted session DTOs and migrations.
//!
//! The stored layout is camelCase JSON, the same shape earlier web clients
//! kept in local storage. Those records carry no `version` field and may use
//! the backend's Portuguese field names; both are accepted on load.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use version_migrate::{IntoDomain, Versioned};

use jobscout_core::JobScoutError;
use jobscout_core::error::Result;
use jobscout_core::session::{Role, Session};

use super::wire::flexible_id;

/// Migration entity name of the persisted session.
pub const SESSION_ENTITY: &str = "session";

/// Version assumed for records written before versioning existed.
const LEGACY_VERSION: &str = "1.0.0";

/// Session V1.0.0.
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct SessionV1_0 {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    #[serde(default, alias = "nome")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(default, alias = "created_at", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, alias = "telefone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, alias = "area_trabalho", skip_serializing_if = "Option::is_none")]
    pub work_area: Option<String>,
    #[serde(default, alias = "nivel_educacao", skip_serializing_if = "Option::is_none")]
    pub education_level: Option<String>,
}

/// Type alias for the latest Session version.
pub type SessionDTO = SessionV1_0;

// ============================================================================
// Domain model conversions
// ============================================================================

/// Convert SessionV1_0 DTO to domain model.
impl IntoDomain<Session> for SessionV1_0 {
    fn into_domain(self) -> Session {
        Session {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
            token: self.token,
            cpf: self.cpf,
            created_at: self.created_at,
            phone: self.phone,
            work_area: self.work_area,
            education_level: self.education_level,
        }
    }
}

/// Convert domain model to SessionV1_0 DTO for persistence.
impl version_migrate::FromDomain<Session> for SessionV1_0 {
    fn from_domain(session: Session) -> Self {
        SessionV1_0 {
            id: session.id,
            name: session.name,
            email: session.email,
            role: session.role,
            token: session.token,
            cpf: session.cpf,
            created_at: session.created_at,
            phone: session.phone,
            work_area: session.work_area,
            education_level: session.education_level,
        }
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates and configures a Migrator instance for persisted sessions.
///
/// # Migration Path
///
/// - V1.0 → Session: Converts DTO to domain model
pub fn create_session_migrator() -> version_migrate::Migrator {
    let mut migrator = version_migrate::Migrator::builder().build();

    let session_path = version_migrate::Migrator::define(SESSION_ENTITY)
        .from::<SessionV1_0>()
        .into_with_save::<Session>();

    migrator
        .register(session_path)
        .expect("Failed to register session migration path");

    migrator
}

// ============================================================================
// Encoding
// ============================================================================

/// Serializes a session into its versioned, flat JSON form.
pub fn encode_session(session: &Session) -> Result<String> {
    let migrator = create_session_migrator();
    Ok(migrator.save_domain_flat(SESSION_ENTITY, session)?)
}

/// Parses a stored session.
///
/// Records without a `version` field are read as V1.0. A session without a
/// token or id is rejected as malformed.
pub fn decode_session(raw: &str) -> Result<Session> {
    let mut value: Value = serde_json::from_str(raw)?;

    let object = value.as_object_mut().ok_or_else(|| JobScoutError::Serialization {
        format: "JSON".to_string(),
        message: "stored session is not a JSON object".to_string(),
    })?;
    if !object.contains_key("version") {
        object.insert("version".to_string(), Value::String(LEGACY_VERSION.to_string()));
    }

    let migrator = create_session_migrator();
    let session: Session = migrator.load_flat_from(SESSION_ENTITY, value)?;

    if session.token.trim().is_empty() || session.id.trim().is_empty() {
        return Err(JobScoutError::Serialization {
            format: "session".to_string(),
            message: "stored session has no id or token".to_string(),
        });
    }

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Session {
        Session {
            id: "1".to_string(),
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            role: Role::User,
            token: "T".to_string(),
            cpf: None,
            created_at: None,
            phone: Some("555".to_string()),
            work_area: Some("Backend".to_string()),
            education_level: None,
        }
    }

    #[test]
    fn test_session_migrator_creation() {
        let _migrator = create_session_migrator();
    }

    #[test]
    fn test_encode_is_versioned_camel_case() {
        let json = encode_session(&sample()).unwrap();

        assert!(json.contains("\"version\":\"1.0.0\""));
        assert!(json.contains("\"workArea\":\"Backend\""));
        assert!(json.contains("\"token\":\"T\""));
        assert!(!json.contains("educationLevel"));
    }

    #[test]
    fn test_decode_what_encode_wrote() {
        let session = sample();
        let decoded = decode_session(&encode_session(&session).unwrap()).unwrap();
        assert_eq!(decoded, session);
    }

    #[test]
    fn test_decode_legacy_unversioned_record() {
        // Layout written by the web client: profile spread plus role and token
        let raw = r#"{
            "id": 42,
            "nome": "Ana",
            "email": "ana@example.com",
            "telefone": "555",
            "area_trabalho": "Backend",
            "role": "user",
            "token": "abc",
            "createdAt": "2024-01-01T00:00:00"
        }"#;

        let session = decode_session(raw).unwrap();
        assert_eq!(session.id, "42");
        assert_eq!(session.name, "Ana");
        assert_eq!(session.phone.as_deref(), Some("555"));
        assert_eq!(session.work_area.as_deref(), Some("Backend"));
        assert_eq!(session.created_at.as_deref(), Some("2024-01-01T00:00:00"));
        assert_eq!(session.token, "abc");
    }

    #[test]
    fn test_decode_rejects_malformed_records() {
        for raw in [
            "not json",
            "[1,2,3]",
            r#"{"id":1,"role":"user"}"#,
            r#"{"id":1,"role":"owner","token":"t"}"#,
            r#"{"id":1,"role":"user","token":"  "}"#,
            r#"{"version":"9.9.9","id":1,"role":"user","token":"t"}"#,
        ] {
            let result = decode_session(raw);
            assert!(result.is_err(), "accepted malformed record {}", raw);
        }
    }

    #[test]
    fn test_malformed_json_is_classified_as_malformed_data() {
        let err = decode_session("{").unwrap_err();
        assert!(err.is_malformed_data());
    }
}
