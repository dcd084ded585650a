//! Shared application state for all routes.

use crate::backend::Backend;
use std::sync::Arc;

/// Constructed once at startup and cloned into every handler; the backend
/// client lives for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<Backend>,
}

impl AppState {
    pub fn new(backend: Backend) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }
}
