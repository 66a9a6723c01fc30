//! Wiring of configuration, storage, gateways and services.

use std::sync::Arc;

use anyhow::{Context, Result};

use jobscout_application::{JobSearchService, SessionStore, Subscription};
use jobscout_core::config::RootConfig;
use jobscout_core::session::SessionRepository;
use jobscout_infrastructure::http::build_client;
use jobscout_infrastructure::paths::JobScoutPaths;
use jobscout_infrastructure::{
    ConfigService, DurableSessionRepository, DurableStorage, FileDurableStorage,
    HttpAccountGateway, HttpAuthGateway, HttpCatalogGateway, InMemoryStorage,
};

pub struct AppContext {
    pub config: RootConfig,
    pub store: Arc<SessionStore>,
    pub jobs: JobSearchService,
    _change_log: Subscription,
}

impl AppContext {
    /// Builds the application for one invocation.
    ///
    /// `ephemeral` keeps the session in memory only.
    pub fn build(paths: &JobScoutPaths, ephemeral: bool) -> Result<Self> {
        let config = ConfigService::new(paths.clone()).get_config();

        let storage: Arc<dyn DurableStorage> = if ephemeral {
            Arc::new(InMemoryStorage::new())
        } else {
            let dir = paths.storage_dir().context("Failed to resolve storage directory")?;
            Arc::new(FileDurableStorage::new(dir))
        };
        let repository: Arc<dyn SessionRepository> = Arc::new(DurableSessionRepository::with_key(
            storage,
            config.storage.session_key.clone(),
        ));

        let client = build_client(&config.http)?;
        let auth = Arc::new(HttpAuthGateway::new(client.clone(), config.api.auth_base()));
        let accounts = Arc::new(HttpAccountGateway::new(client.clone(), config.api.api_base()));
        let catalog = Arc::new(HttpCatalogGateway::new(client, config.api.api_base()));

        let store = Arc::new(SessionStore::new(repository, auth, accounts.clone(), accounts));
        let jobs = JobSearchService::new(Arc::clone(&store), catalog);

        let observed = Arc::downgrade(&store);
        let change_log = store.subscribe(move || {
            if let Some(store) = observed.upgrade() {
                match store.current_session() {
                    Some(session) => tracing::debug!("Session changed: {} ({})", session.id, session.role),
                    None => tracing::debug!("Session changed: anonymous"),
                }
            }
        });

        Ok(Self {
            config,
            store,
            jobs,
            _change_log: change_log,
        })
    }
}
