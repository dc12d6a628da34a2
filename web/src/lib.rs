use domain::cache::CachedStore;
use domain::store::SentimentStore;
use log::*;
use service::config::Config;
use std::sync::Arc;
use tokio::net::TcpListener;

pub use self::error::{Error, Result};

mod controller;
mod error;
mod params;
mod router;

// Web-level state: the service infrastructure plus the store every handler
// reads through. Cloned into each router.
#[derive(Clone)]
pub struct AppState {
    pub service_state: service::AppState,
    store: Arc<dyn SentimentStore>,
}

impl AppState {
    pub fn new(service_state: service::AppState) -> Self {
        let connection: Arc<dyn SentimentStore> = service_state.database_connection.clone();
        let store: Arc<dyn SentimentStore> = if service_state.config.cache_responses {
            let max_entries = service_state.config.cache_max_entries;
            info!("Caching query results for up to {max_entries} topic selections per query");
            Arc::new(CachedStore::new(connection, max_entries))
        } else {
            connection
        };

        Self {
            service_state,
            store,
        }
    }

    pub fn config(&self) -> &Config {
        &self.service_state.config
    }

    pub fn store(&self) -> &dyn SentimentStore {
        self.store.as_ref()
    }
}

/// Binds the configured interface and port and serves the API until the process exits.
pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let config = app_state.config();
    let interface = config.interface.as_deref().unwrap_or("127.0.0.1");
    let address = format!("{interface}:{}", config.port);

    info!(
        "Server starting... listening for connections on http://{address} ({} environment)",
        config.runtime_env()
    );

    let listener = TcpListener::bind(&address).await?;
    let app = router::define_routes(app_state);

    axum::serve(listener, app).await
}
