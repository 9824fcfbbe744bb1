//! Application state shared across handlers.

use std::sync::Arc;

use crate::db::{DesignRepository, ProductRepository, Storage};
use crate::services::Designer;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds the storage backends and the AI
/// designer; nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    storage: Storage,
    designer: Designer,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(storage: Storage, designer: Designer) -> Self {
        Self {
            inner: Arc::new(AppStateInner { storage, designer }),
        }
    }

    /// Saved design repository.
    #[must_use]
    pub fn designs(&self) -> &dyn DesignRepository {
        self.inner.storage.designs.as_ref()
    }

    /// Product catalogue repository.
    #[must_use]
    pub fn products(&self) -> &dyn ProductRepository {
        self.inner.storage.products.as_ref()
    }

    /// The AI designer gateway.
    #[must_use]
    pub fn designer(&self) -> &Designer {
        &self.inner.designer
    }
}
