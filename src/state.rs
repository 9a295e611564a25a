use sqlx::PgPool;

use bym_backend::config::AppConfig;
use bym_backend::content::ContentStore;
use bym_backend::email::Mailer;
use bym_backend::search::SearchService;

/// Shared per-process state, constructed once at bootstrap and injected into
/// every handler. No handler reaches for globals.
pub struct AppState {
    pub db: PgPool,
    pub store: ContentStore,
    pub search: SearchService,
    pub mailer: Mailer,
    pub http: reqwest::Client,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(db: PgPool, config: AppConfig) -> Self {
        let store = ContentStore::new(db.clone());
        let search = SearchService::new(store.clone(), config.storage.public_base_url.clone());
        let mailer = Mailer::new(config.email.clone());

        Self {
            db,
            store,
            search,
            mailer,
            http: reqwest::Client::new(),
            config,
        }
    }
}
