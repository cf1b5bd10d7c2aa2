use api::ApiConfig;
use api::HttpBackend;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug)]
pub struct AppStateData {
    pub config: ApiConfig,
    pub backend: HttpBackend,
}

/// Immutable, shared for the lifetime of the app. Provided as context.
#[derive(Clone, Debug)]
pub struct AppState(Arc<AppStateData>);

impl PartialEq for AppState {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self(Arc::new(AppStateData {
            backend: HttpBackend::new(config.clone()),
            config,
        }))
    }
}
