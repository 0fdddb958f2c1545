use serde::{Deserialize, Serialize};

// Catalog entry held in memory for the process lifetime.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub price_cents: u64,
    pub created_at: u64,
}
