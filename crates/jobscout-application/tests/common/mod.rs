//! Fake collaborators shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use jobscout_application::SessionStore;
use jobscout_core::JobScoutError;
use jobscout_core::catalog::{Application, CatalogGateway, Company, Job, JobApplicants, Skill};
use jobscout_core::session::{
    AuthGateway, Credentials, GatewayError, Profile, ProfileGateway, Registration,
    RegistrationGateway, Role, SessionRepository,
};
use jobscout_infrastructure::{DurableSessionRepository, DurableStorage, InMemoryStorage};

/// Scriptable stand-in for every backend service.
pub struct FakeBackend {
    pub token: Mutex<String>,
    pub role: Mutex<Role>,
    pub profile: Mutex<Profile>,
    pub login_error: Mutex<Option<GatewayError>>,
    pub verify_error: Mutex<Option<GatewayError>>,
    pub profile_error: Mutex<Option<GatewayError>>,
    pub registration_error: Mutex<Option<GatewayError>>,
    pub issued_for: Mutex<Vec<String>>,
    pub registered: Mutex<Vec<Registration>>,

    pub jobs: Mutex<Vec<Job>>,
    pub companies: Mutex<Vec<Company>>,
    pub applications: Mutex<Vec<Application>>,
    pub applied: Mutex<Vec<(i64, String, String)>>,
    pub skills: Mutex<Vec<Skill>>,
    pub admin_applications: Mutex<Vec<JobApplicants>>,
    pub admin_tokens: Mutex<Vec<String>>,
    pub application_lookups: AtomicUsize,
    pub skill_lookups: AtomicUsize,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            token: Mutex::new("T".to_string()),
            role: Mutex::new(Role::User),
            profile: Mutex::new(profile("1", "A")),
            login_error: Mutex::new(None),
            verify_error: Mutex::new(None),
            profile_error: Mutex::new(None),
            registration_error: Mutex::new(None),
            issued_for: Mutex::new(Vec::new()),
            registered: Mutex::new(Vec::new()),
            jobs: Mutex::new(Vec::new()),
            companies: Mutex::new(Vec::new()),
            applications: Mutex::new(Vec::new()),
            applied: Mutex::new(Vec::new()),
            skills: Mutex::new(vec![Skill {
                id: 1,
                name: "Rust".to_string(),
            }]),
            admin_applications: Mutex::new(Vec::new()),
            admin_tokens: Mutex::new(Vec::new()),
            application_lookups: AtomicUsize::new(0),
            skill_lookups: AtomicUsize::new(0),
        }
    }

    pub fn set_identity(&self, token: &str, role: Role, profile: Profile) {
        *self.token.lock().unwrap() = token.to_string();
        *self.role.lock().unwrap() = role;
        *self.profile.lock().unwrap() = profile;
    }
}

pub fn profile(id: &str, name: &str) -> Profile {
    Profile {
        id: id.to_string(),
        name: name.to_string(),
        ..Profile::default()
    }
}

#[async_trait]
impl AuthGateway for FakeBackend {
    async fn issue_token(&self, credentials: &Credentials) -> Result<String, GatewayError> {
        if let Some(err) = self.login_error.lock().unwrap().clone() {
            return Err(err);
        }
        self.issued_for.lock().unwrap().push(credentials.email.clone());
        Ok(self.token.lock().unwrap().clone())
    }

    async fn verify_token(&self, token: &str) -> Result<Role, GatewayError> {
        if let Some(err) = self.verify_error.lock().unwrap().clone() {
            return Err(err);
        }
        assert_eq!(token, *self.token.lock().unwrap());
        Ok(*self.role.lock().unwrap())
    }
}

#[async_trait]
impl ProfileGateway for FakeBackend {
    async fn fetch_profile(&self, role: Role, token: &str) -> Result<Profile, GatewayError> {
        if let Some(err) = self.profile_error.lock().unwrap().clone() {
            return Err(err);
        }
        assert_eq!(role, *self.role.lock().unwrap());
        assert_eq!(token, *self.token.lock().unwrap());
        Ok(self.profile.lock().unwrap().clone())
    }
}

#[async_trait]
impl RegistrationGateway for FakeBackend {
    async fn create_account(&self, registration: &Registration) -> Result<(), GatewayError> {
        if let Some(err) = self.registration_error.lock().unwrap().clone() {
            return Err(err);
        }
        self.registered.lock().unwrap().push(registration.clone());
        Ok(())
    }
}

#[async_trait]
impl CatalogGateway for FakeBackend {
    async fn list_jobs(&self) -> Result<Vec<Job>, GatewayError> {
        Ok(self.jobs.lock().unwrap().clone())
    }

    async fn list_companies(&self) -> Result<Vec<Company>, GatewayError> {
        Ok(self.companies.lock().unwrap().clone())
    }

    async fn list_user_applications(&self, _user_id: &str) -> Result<Vec<Application>, GatewayError> {
        self.application_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.applications.lock().unwrap().clone())
    }

    async fn list_user_skills(&self, _user_id: &str) -> Result<Vec<Skill>, GatewayError> {
        self.skill_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.skills.lock().unwrap().clone())
    }

    async fn apply(&self, job_id: i64, user_id: &str, token: &str) -> Result<(), GatewayError> {
        if !self.jobs.lock().unwrap().iter().any(|job| job.id == job_id) {
            return Err(GatewayError::rejected(404, "Job not found"));
        }
        self.applied
            .lock()
            .unwrap()
            .push((job_id, user_id.to_string(), token.to_string()));
        Ok(())
    }

    async fn list_admin_applications(&self, token: &str) -> Result<Vec<JobApplicants>, GatewayError> {
        self.admin_tokens.lock().unwrap().push(token.to_string());
        Ok(self.admin_applications.lock().unwrap().clone())
    }
}

/// In-memory storage whose writes can be made to fail. Reads keep working.
#[derive(Default)]
pub struct FailingWrites {
    inner: InMemoryStorage,
    failing: AtomicBool,
}

impl FailingWrites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> jobscout_core::error::Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(JobScoutError::storage("disk full"));
        }
        Ok(())
    }
}

impl DurableStorage for FailingWrites {
    fn get_item(&self, key: &str) -> jobscout_core::error::Result<Option<String>> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> jobscout_core::error::Result<()> {
        self.check()?;
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> jobscout_core::error::Result<()> {
        self.check()?;
        self.inner.remove_item(key)
    }
}

/// A store over in-memory storage, plus handles to its collaborators.
pub struct Harness {
    pub store: Arc<SessionStore>,
    pub backend: Arc<FakeBackend>,
    pub storage: Arc<InMemoryStorage>,
}

pub fn harness() -> Harness {
    let storage = Arc::new(InMemoryStorage::new());
    let backend = Arc::new(FakeBackend::new());
    let store = store_over(storage.clone(), backend.clone());
    Harness {
        store,
        backend,
        storage,
    }
}

pub fn store_over(storage: Arc<dyn DurableStorage>, backend: Arc<FakeBackend>) -> Arc<SessionStore> {
    let repository: Arc<dyn SessionRepository> = Arc::new(DurableSessionRepository::new(storage));
    Arc::new(SessionStore::new(
        repository,
        backend.clone(),
        backend.clone(),
        backend,
    ))
}

/// Subscribes a listener that counts its invocations.
pub fn counting_listener(store: &SessionStore) -> (Arc<AtomicUsize>, jobscout_application::Subscription) {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let subscription = store.subscribe(move || {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    (count, subscription)
}

pub fn calls(count: &AtomicUsize) -> usize {
    count.load(Ordering::SeqCst)
}
