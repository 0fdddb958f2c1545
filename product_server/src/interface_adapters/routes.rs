use axum::{
    Router,
    routing::{get, post},
};

use crate::interface_adapters::handlers::{create_product, get_product, health, list_products};
use crate::interface_adapters::state::AppState;

// Build the HTTP router for the product service. The state is passed in
// explicitly so tests can mount several isolated instances in one process.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/products", get(list_products))
        .route("/products", post(create_product))
        .route("/products/{id}", get(get_product))
        .with_state(state)
}
