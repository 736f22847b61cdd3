//! Product catalog routes.
//!
//! Endpoints:
//! - `GET    /api/products`       — list the catalog
//! - `GET    /api/products/{id}`  — fetch a single product
//! - `POST   /api/products`       — create a product
//! - `PUT    /api/products`       — replace a product's mutable fields
//! - `DELETE /api/products/{id}`  — remove a product
//!
//! Handlers validate transport input, delegate to the [`ProductStore`], and
//! fold every store result into an [`Outcome`]. The store never sees a
//! request the handler already knows is malformed, and raw store failure
//! text never reaches the caller on the 500 paths.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use rust_decimal::Decimal;
use serde_json::json;
use tracing::{error, info};

use catalog_core::{Product, ProductId, ProductStore, StoreError};

const RETRIEVE_FAILURE: &str = "An error occurred while retrieving the product";
const CREATE_FAILURE: &str = "An error occurred while creating the product";
const UPDATE_FAILURE: &str = "An error occurred while updating the product";
const DELETE_FAILURE: &str = "An error occurred while deleting the product";

#[derive(Clone)]
pub struct ProductsState {
    store: Arc<dyn ProductStore>,
}

impl ProductsState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }
}

/// Discriminated result of a product handler. The HTTP contract lives in
/// exactly one place: the [`IntoResponse`] impl below.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Found(Product),
    Listing(Vec<Product>),
    Created(Product),
    NoContent,
    NotFound,
    BadInput(Option<String>),
    Internal(&'static str),
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Outcome::Found(product) => (StatusCode::OK, Json(product)).into_response(),
            Outcome::Listing(products) => (StatusCode::OK, Json(products)).into_response(),
            Outcome::Created(product) => (StatusCode::CREATED, Json(product)).into_response(),
            Outcome::NoContent => StatusCode::NO_CONTENT.into_response(),
            Outcome::NotFound => StatusCode::NOT_FOUND.into_response(),
            Outcome::BadInput(None) => StatusCode::BAD_REQUEST.into_response(),
            Outcome::BadInput(Some(message)) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
            }
            Outcome::Internal(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "message": message })))
                    .into_response()
            }
        }
    }
}

pub fn router(store: Arc<dyn ProductStore>) -> Router {
    Router::new()
        .route(
            "/api/products",
            get(list_products).post(create_product).put(update_product),
        )
        .route("/api/products/{id}", get(get_product).delete(delete_product))
        .with_state(ProductsState::new(store))
}

pub async fn get_product(State(state): State<ProductsState>, Path(id): Path<u32>) -> Outcome {
    match state.store.find_by_id(ProductId(id)).await {
        Ok(Some(product)) => Outcome::Found(product),
        Ok(None) => Outcome::NotFound,
        Err(cause) => {
            error!(
                event_name = "catalog.product.get_failed",
                product_id = id,
                error = %cause,
                "product lookup failed"
            );
            Outcome::Internal(RETRIEVE_FAILURE)
        }
    }
}

pub async fn list_products(State(state): State<ProductsState>) -> Outcome {
    match state.store.list_all().await {
        Ok(products) => Outcome::Listing(products),
        Err(cause) => {
            error!(
                event_name = "catalog.product.list_failed",
                error = %cause,
                "product listing failed"
            );
            Outcome::Internal(RETRIEVE_FAILURE)
        }
    }
}

pub async fn create_product(
    State(state): State<ProductsState>,
    payload: Result<Json<Product>, JsonRejection>,
) -> Outcome {
    let Ok(Json(candidate)) = payload else {
        return Outcome::BadInput(None);
    };
    if candidate.sku.is_none() || candidate.price <= Decimal::ZERO {
        return Outcome::BadInput(None);
    }

    match state.store.create(candidate).await {
        Ok(created) => {
            info!(
                event_name = "catalog.product.created",
                product_id = created.id.0,
                "product created"
            );
            Outcome::Created(created)
        }
        Err(StoreError::Validation(message)) => Outcome::BadInput(Some(message)),
        Err(cause) => {
            error!(
                event_name = "catalog.product.create_failed",
                error = %cause,
                "product creation failed"
            );
            Outcome::Internal(CREATE_FAILURE)
        }
    }
}

pub async fn update_product(
    State(state): State<ProductsState>,
    payload: Result<Json<Product>, JsonRejection>,
) -> Outcome {
    let Ok(Json(candidate)) = payload else {
        return Outcome::BadInput(None);
    };
    if candidate.id.is_unassigned()
        || candidate.sku.is_none()
        || candidate.price <= Decimal::ZERO
    {
        return Outcome::BadInput(None);
    }

    // Existence is the handler's call: whether a failed update is a 404, a
    // 400, or a 500 is decided here, not inside the store.
    let existing = match state.store.find_by_id(candidate.id).await {
        Ok(found) => found,
        Err(cause) => {
            error!(
                event_name = "catalog.product.update_failed",
                product_id = candidate.id.0,
                error = %cause,
                "product lookup before update failed"
            );
            return Outcome::Internal(UPDATE_FAILURE);
        }
    };
    if existing.is_none() {
        return Outcome::NotFound;
    }

    match state.store.update(candidate.clone()).await {
        Ok(()) => {
            info!(
                event_name = "catalog.product.updated",
                product_id = candidate.id.0,
                "product updated"
            );
            Outcome::NoContent
        }
        Err(StoreError::Validation(message)) => Outcome::BadInput(Some(message)),
        Err(StoreError::NotFound(_)) => Outcome::NotFound,
        Err(cause) => {
            error!(
                event_name = "catalog.product.update_failed",
                product_id = candidate.id.0,
                error = %cause,
                "product update failed"
            );
            Outcome::Internal(UPDATE_FAILURE)
        }
    }
}

pub async fn delete_product(State(state): State<ProductsState>, Path(id): Path<u32>) -> Outcome {
    let existing = match state.store.find_by_id(ProductId(id)).await {
        Ok(found) => found,
        Err(cause) => {
            error!(
                event_name = "catalog.product.delete_failed",
                product_id = id,
                error = %cause,
                "product lookup before delete failed"
            );
            return Outcome::Internal(DELETE_FAILURE);
        }
    };
    let Some(product) = existing else {
        return Outcome::NotFound;
    };

    match state.store.delete(product.id).await {
        Ok(()) => {
            info!(
                event_name = "catalog.product.deleted",
                product_id = id,
                "product deleted"
            );
            Outcome::NoContent
        }
        Err(cause) => {
            error!(
                event_name = "catalog.product.delete_failed",
                product_id = id,
                error = %cause,
                "product deletion failed"
            );
            Outcome::Internal(DELETE_FAILURE)
        }
    }
}
