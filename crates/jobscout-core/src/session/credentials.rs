//! Login and registration inputs.

use super::model::Role;
use std::fmt;

/// Email/password pair exchanged for a bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// New-account request. The role decides which creation endpoint is used and
/// which optional fields are sent.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
    pub cpf: String,
    pub role: Role,
    pub phone: Option<String>,
    /// Only sent for [`Role::User`] accounts.
    pub work_area: Option<String>,
    /// Only sent for [`Role::User`] accounts.
    pub education_level: Option<String>,
}

impl Registration {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        cpf: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
            cpf: cpf.into(),
            role,
            phone: None,
            work_area: None,
            education_level: None,
        }
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

    /// Credentials used for the login that follows a successful registration.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("role", &self.role)
            .field("phone", &self.phone)
            .field("work_area", &self.work_area)
            .field("education_level", &self.education_level)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::new("a@b.com", "secret");
        let printed = format!("{:?}", credentials);
        assert!(printed.contains("a@b.com"));
        assert!(!printed.contains("secret"));

        let registration = Registration::new("a@b.com", "secret", "A", "000", Role::User);
        assert!(!format!("{:?}", registration).contains("secret"));
    }

    #[test]
    fn test_registration_credentials() {
        let registration = Registration::new("a@b.com", "pw", "A", "000", Role::Admin)
            .with_phone("555")
            .with_work_area("ignored for admins");
        let credentials = registration.credentials();
        assert_eq!(credentials, Credentials::new("a@b.com", "pw"));
        assert_eq!(registration.phone.as_deref(), Some("555"));
    }
}
