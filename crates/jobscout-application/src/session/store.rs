use std::sync::Arc;

use jobscout_core::session::{
    AuthGateway, Credentials, GatewayError, ProfileGateway, Registration, RegistrationGateway,
    Session, SessionError, SessionPatch, SessionRepository, SessionState,
};

use super::listeners::{ListenerRegistry, Subscription};

/// The process-wide owner of the authenticated identity.
///
/// Construct one per application instance, wrap it in an `Arc` and hand it
/// to every consumer. Reads go to the repository each time, so a session
/// cleared or corrupted behind the store's back reads as anonymous.
///
/// Every successful `login`, `register`, `update_session` and `logout`
/// notifies each subscribed listener exactly once, after the new state has
/// been persisted. Failed operations leave storage untouched and notify no
/// one.
pub struct SessionStore {
    repository: Arc<dyn SessionRepository>,
    auth: Arc<dyn AuthGateway>,
    profiles: Arc<dyn ProfileGateway>,
    registrations: Arc<dyn RegistrationGateway>,
    listeners: ListenerRegistry,
}

impl SessionStore {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        auth: Arc<dyn AuthGateway>,
        profiles: Arc<dyn ProfileGateway>,
        registrations: Arc<dyn RegistrationGateway>,
    ) -> Self {
        Self {
            repository,
            auth,
            profiles,
            registrations,
            listeners: ListenerRegistry::new(),
        }
    }

    /// Returns the persisted session, if any. Never touches the network.
    pub fn current_session(&self) -> Option<Session> {
        match self.repository.load() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Failed to read current session: {}", e);
                None
            }
        }
    }

    pub fn state(&self) -> SessionState {
        SessionState::from(self.current_session())
    }

    /// Authenticates, fetches the role-specific profile and makes the result
    /// the current session.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, SessionError> {
        let session = self.authenticate(credentials).await?;
        self.persist(&session)?;

        tracing::info!("Logged in as {} ({})", session.id, session.role);
        self.listeners.notify();
        Ok(session)
    }

    /// Creates the account, then logs in with the same credentials.
    ///
    /// Listeners are notified once, when the login completes. A failed
    /// registration keeps any previous session.
    pub async fn register(&self, registration: &Registration) -> Result<Session, SessionError> {
        self.registrations
            .create_account(registration)
            .await
            .map_err(SessionError::from_registration)?;
        tracing::info!("Registered {} account for {}", registration.role, registration.email);

        let session = self.authenticate(&registration.credentials()).await?;
        self.persist(&session)?;

        tracing::info!("Logged in as {} ({})", session.id, session.role);
        self.listeners.notify();
        Ok(session)
    }

    /// Merges `patch` into the current session and persists the result.
    pub fn update_session(&self, patch: SessionPatch) -> Result<Session, SessionError> {
        let mut session = self
            .current_session()
            .ok_or(SessionError::NotAuthenticated)?;
        session.apply(patch);
        self.persist(&session)?;

        tracing::info!("Updated session of {}", session.id);
        self.listeners.notify();
        Ok(session)
    }

    /// Clears the current session. Logging out while anonymous succeeds and
    /// still notifies.
    pub fn logout(&self) -> Result<(), SessionError> {
        if let Err(e) = self.repository.clear() {
            if self.current_session().is_some() {
                tracing::warn!("Failed to clear session: {}", e);
                return Err(e.into());
            }
            tracing::warn!("Failed to clear session storage while anonymous: {}", e);
        }

        tracing::info!("Logged out");
        self.listeners.notify();
        Ok(())
    }

    /// Registers `listener` to run after every completed mutation.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Token, role and profile, in that order. Persists nothing.
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, SessionError> {
        let token = self
            .auth
            .issue_token(credentials)
            .await
            .map_err(SessionError::from_auth)?;

        let role = self
            .auth
            .verify_token(&token)
            .await
            .map_err(verification_error)?;

        let profile = self
            .profiles
            .fetch_profile(role, &token)
            .await
            .map_err(SessionError::from_profile)?;

        Ok(Session::assemble(profile, role, token, &credentials.email))
    }

    fn persist(&self, session: &Session) -> Result<(), SessionError> {
        self.repository.save(session).map_err(|e| {
            tracing::warn!("Failed to persist session: {}", e);
            SessionError::from(e)
        })
    }
}

/// A freshly issued token that does not verify is an authentication failure,
/// unless the verifier was unreachable.
fn verification_error(err: GatewayError) -> SessionError {
    match err {
        GatewayError::Transport(message) => SessionError::Network(message),
        other => SessionError::Authentication(other.message().to_string()),
    }
}
