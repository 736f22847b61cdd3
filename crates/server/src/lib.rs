pub mod bootstrap;
pub mod health;
pub mod products;

use std::sync::Arc;

use axum::Router;
use catalog_core::ProductStore;

pub use bootstrap::{bootstrap, bootstrap_with_config, Application, BootstrapError};

/// Build the full application router: product CRUD plus health.
pub fn app_router(store: Arc<dyn ProductStore>) -> Router {
    products::router(store.clone()).merge(health::router(store))
}
