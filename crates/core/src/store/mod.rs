use async_trait::async_trait;
use thiserror::Error;

use crate::domain::product::{Product, ProductId};

mod memory;

pub use memory::InMemoryProductStore;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Capability interface over the product collection. The in-memory store is
/// the only shipped implementation; handlers depend on the trait so tests can
/// substitute failing or recording doubles.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Assigns the next sequential id and appends the product. Any
    /// caller-supplied id is ignored.
    async fn create(&self, product: Product) -> Result<Product, StoreError>;

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// Point-in-time snapshot in insertion order.
    async fn list_all(&self) -> Result<Vec<Product>, StoreError>;

    /// Replaces sku, description, and price of the product carrying this id.
    /// The id itself is never altered.
    async fn update(&self, product: Product) -> Result<(), StoreError>;

    /// Removes the product with this id. Missing ids are a silent no-op.
    async fn delete(&self, id: ProductId) -> Result<(), StoreError>;
}
