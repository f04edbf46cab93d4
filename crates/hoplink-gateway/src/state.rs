use std::sync::Arc;

use hoplink_core::LinkService;

/// Shared per-request state: the redirect service handle and the base
/// URL advertised in shorten responses.
///
/// Constructed once at startup and injected into the router; handlers
/// never reach for globals.
#[derive(Clone)]
pub struct AppState {
    service: Arc<dyn LinkService>,
    base_url: String,
}

impl AppState {
    pub fn new(service: Arc<dyn LinkService>, public_base_url: impl Into<String>) -> Self {
        Self {
            service,
            base_url: public_base_url.into(),
        }
    }

    pub fn service(&self) -> &Arc<dyn LinkService> {
        &self.service
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
