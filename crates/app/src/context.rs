//! App Context

use std::sync::Arc;

use crate::domain::carts::{CartsService, DocumentCartsService, store::InMemoryCartStore};

#[derive(Clone)]
pub struct AppContext {
    pub carts: Arc<dyn CartsService>,
}

impl AppContext {
    /// Build an application context over an in-memory document store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_service(DocumentCartsService::new(InMemoryCartStore::new()))
    }

    /// Build an application context around an existing carts service.
    pub fn from_service(carts: impl CartsService + 'static) -> Self {
        Self {
            carts: Arc::new(carts),
        }
    }
}
