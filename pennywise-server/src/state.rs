//! Application state shared across handlers

use std::sync::Arc;

use pennywise_core::{DatabaseLifecycle, Settings};

use crate::upstream::NessieClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    settings: Settings,
    database: Arc<dyn DatabaseLifecycle>,
    nessie: NessieClient,
}

impl AppState {
    pub fn new(settings: Settings, database: Arc<dyn DatabaseLifecycle>) -> Self {
        let nessie = NessieClient::from_settings(&settings);
        Self::with_nessie(settings, database, nessie)
    }

    pub fn with_nessie(
        settings: Settings,
        database: Arc<dyn DatabaseLifecycle>,
        nessie: NessieClient,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                settings,
                database,
                nessie,
            }),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    pub fn database(&self) -> &Arc<dyn DatabaseLifecycle> {
        &self.inner.database
    }

    pub fn nessie(&self) -> &NessieClient {
        &self.inner.nessie
    }
}
