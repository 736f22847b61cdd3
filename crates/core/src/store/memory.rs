use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::domain::product::{Product, ProductId};

use super::{ProductStore, StoreError};

const PRICE_MESSAGE: &str = "Price must be greater than 0";
const MISSING_MESSAGE: &str = "Invalid entity. Product not found";

#[derive(Default)]
struct Inner {
    products: Vec<Product>,
    last_id: u32,
}

/// Owns the authoritative product collection and the id counter. All
/// mutation runs under the write lock; reads hand out clones, never a live
/// view of the collection.
#[derive(Default)]
pub struct InMemoryProductStore {
    inner: RwLock<Inner>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ProductStore for InMemoryProductStore {
    async fn create(&self, mut product: Product) -> Result<Product, StoreError> {
        // Zero-priced products pass this check; only negative prices are
        // rejected at creation. The stricter `> 0` rule applies on update.
        if product.price < Decimal::ZERO {
            return Err(StoreError::Validation(PRICE_MESSAGE.to_string()));
        }

        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        product.id = ProductId(inner.last_id);
        inner.products.push(product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.products.iter().find(|product| product.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.products.clone())
    }

    async fn update(&self, product: Product) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let existing = inner
            .products
            .iter_mut()
            .find(|candidate| candidate.id == product.id)
            .ok_or_else(|| StoreError::NotFound(MISSING_MESSAGE.to_string()))?;

        if product.price <= Decimal::ZERO {
            return Err(StoreError::Validation(PRICE_MESSAGE.to_string()));
        }

        existing.sku = product.sku;
        existing.description = product.description;
        existing.price = product.price;
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.products.retain(|product| product.id != id);
        Ok(())
    }
}
