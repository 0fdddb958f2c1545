use serde::{Deserialize, Serialize};

use crate::domain::entities::Product;

// Request payload for product creation.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub sku: String,
    pub price_cents: u64,
}

// Response payload for a single catalog entry.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub price_cents: u64,
    pub created_at: u64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            sku: product.sku,
            price_cents: product.price_cents,
            created_at: product.created_at,
        }
    }
}

// Response payload for the catalog listing.
#[derive(Debug, Serialize)]
pub struct ListProductsResponse {
    pub products: Vec<ProductResponse>,
}

// Response payload for the health probe.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
