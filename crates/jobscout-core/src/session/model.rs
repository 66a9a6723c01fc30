//! Session domain model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role reported by the auth collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Job seeker.
    #[default]
    User,
    /// Company administrator.
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// Identity fields returned by the profile collaborator's "me" endpoint,
/// already normalized to domain names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub cpf: Option<String>,
    pub created_at: Option<String>,
    pub phone: Option<String>,
    pub work_area: Option<String>,
    pub education_level: Option<String>,
}

/// The authenticated identity and credential for the current storage scope.
///
/// Owned by the session store; everything else works on cloned snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque identifier assigned by the backend.
    pub id: String,
    /// Display name.
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Bearer token issued by the auth collaborator.
    pub token: String,
    /// National id number.
    #[serde(default)]
    pub cpf: Option<String>,
    /// Account creation timestamp as reported by the backend.
    #[serde(default)]
    pub created_at: Option<String>,

    // Role-specific profile attributes
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub work_area: Option<String>,
    #[serde(default)]
    pub education_level: Option<String>,
}

impl Session {
    /// Builds a session from a fetched profile plus the token and role that
    /// were issued for it.
    ///
    /// `login_email` fills in the email when the profile omits it.
    pub fn assemble(profile: Profile, role: Role, token: String, login_email: &str) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            email: profile.email.unwrap_or_else(|| login_email.to_string()),
            role,
            token,
            cpf: profile.cpf,
            created_at: profile.created_at,
            phone: profile.phone,
            work_area: profile.work_area,
            education_level: profile.education_level,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Merges the fields present in `patch`, leaving every other field as is.
    pub fn apply(&mut self, patch: SessionPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(cpf) = patch.cpf {
            self.cpf = Some(cpf);
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
        if let Some(work_area) = patch.work_area {
            self.work_area = Some(work_area);
        }
        if let Some(education_level) = patch.education_level {
            self.education_level = Some(education_level);
        }
    }
}

/// Partial update of the mutable profile fields of a [`Session`].
///
/// `id`, `role` and `token` only change through a new login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_level: Option<String>,
}

impl SessionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_cpf(mut self, cpf: impl Into<String>) -> Self {
        self.cpf = Some(cpf.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_work_area(mut self, work_area: impl Into<String>) -> Self {
        self.work_area = Some(work_area.into());
        self
    }

    pub fn with_education_level(mut self, education_level: impl Into<String>) -> Self {
        self.education_level = Some(education_level.into());
        self
    }

    /// True when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.cpf.is_none()
            && self.phone.is_none()
            && self.work_area.is_none()
            && self.education_level.is_none()
    }
}

/// Authentication state of a storage scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated(Session),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            SessionState::Anonymous => None,
        }
    }
}

impl From<Option<Session>> for SessionState {
    fn from(session: Option<Session>) -> Self {
        match session {
            Some(session) => SessionState::Authenticated(session),
            None => SessionState::Anonymous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        Session {
            id: "1".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            role: Role::User,
            token: "tok".to_string(),
            cpf: Some("123".to_string()),
            created_at: None,
            phone: Some("555-0100".to_string()),
            work_area: Some("Backend".to_string()),
            education_level: None,
        }
    }

    #[test]
    fn test_role_parse_and_display() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(" User ".parse::<Role>().unwrap(), Role::User);
        assert!("owner".parse::<Role>().is_err());
        assert_eq!(Role::Admin.to_string(), "admin");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_assemble_uses_login_email_when_profile_omits_it() {
        let profile = Profile {
            id: "1".to_string(),
            name: "A".to_string(),
            ..Default::default()
        };
        let session = Session::assemble(profile, Role::User, "T".to_string(), "a@b.com");
        assert_eq!(session.id, "1");
        assert_eq!(session.name, "A");
        assert_eq!(session.email, "a@b.com");
        assert_eq!(session.role, Role::User);
        assert_eq!(session.token, "T");
    }

    #[test]
    fn test_assemble_prefers_profile_email() {
        let profile = Profile {
            id: "7".to_string(),
            name: "B".to_string(),
            email: Some("b@corp.com".to_string()),
            ..Default::default()
        };
        let session = Session::assemble(profile, Role::Admin, "T".to_string(), "typed@b.com");
        assert_eq!(session.email, "b@corp.com");
        assert!(session.is_admin());
    }

    #[test]
    fn test_apply_changes_only_patched_fields() {
        let mut session = sample_session();
        let before = session.clone();

        session.apply(SessionPatch::new().with_name("X"));

        assert_eq!(session.name, "X");
        assert_eq!(
            Session {
                name: before.name.clone(),
                ..session.clone()
            },
            before
        );
    }

    #[test]
    fn test_empty_patch() {
        assert!(SessionPatch::new().is_empty());
        assert!(!SessionPatch::new().with_phone("1").is_empty());

        let mut session = sample_session();
        let before = session.clone();
        session.apply(SessionPatch::new());
        assert_eq!(session, before);
    }

    #[test]
    fn test_state_from_option() {
        assert_eq!(SessionState::from(None), SessionState::Anonymous);
        let state = SessionState::from(Some(sample_session()));
        assert!(state.is_authenticated());
        assert_eq!(state.session().map(|s| s.id.as_str()), Some("1"));
    }
}
