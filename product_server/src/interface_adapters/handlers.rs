use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::errors::ProductError;
use crate::frameworks::config::SERVICE_NAME;
use crate::interface_adapters::protocol::{
    CreateProductRequest, ErrorResponse, HealthResponse, ListProductsResponse, ProductResponse,
};
use crate::interface_adapters::state::{AppState, InMemoryProductStore, SystemClock};
use crate::use_cases::create_product::{CreateProductUseCase, NewProduct};
use crate::use_cases::get_product::GetProductUseCase;
use crate::use_cases::list_products::ListProductsUseCase;

// Health probe used by orchestration and the smoke tests.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
    })
}

// Handler for creating a catalog entry.
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), (StatusCode, Json<ErrorResponse>)> {
    let use_case = CreateProductUseCase {
        clock: SystemClock,
        store: store(&state),
    };

    let product = use_case
        .execute(NewProduct {
            name: payload.name,
            sku: payload.sku,
            price_cents: payload.price_cents,
        })
        .await
        .map_err(map_product_error)?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

// Handler for fetching one catalog entry.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = GetProductUseCase {
        store: store(&state),
    };

    let product = use_case.execute(&id).await.map_err(map_product_error)?;

    Ok(Json(product.into()))
}

// Handler for listing the catalog.
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ListProductsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = ListProductsUseCase {
        store: store(&state),
    };

    let products = use_case.execute().await.map_err(map_product_error)?;

    Ok(Json(ListProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}

fn store(state: &AppState) -> InMemoryProductStore {
    InMemoryProductStore {
        products: state.products.clone(),
    }
}

// Map domain errors onto the HTTP error envelope.
fn map_product_error(error: ProductError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, message) = match error {
        ProductError::InvalidName => (StatusCode::BAD_REQUEST, "invalid name"),
        ProductError::InvalidSku => (StatusCode::BAD_REQUEST, "invalid sku"),
        ProductError::InvalidPrice => (StatusCode::BAD_REQUEST, "price_cents must be positive"),
        ProductError::DuplicateSku => (StatusCode::CONFLICT, "sku already exists"),
        ProductError::NotFound => (StatusCode::NOT_FOUND, "product not found"),
        ProductError::StorageFailure => (StatusCode::INTERNAL_SERVER_ERROR, "storage failure"),
    };

    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}
