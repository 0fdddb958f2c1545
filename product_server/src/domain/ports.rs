use async_trait::async_trait;

use crate::domain::entities::Product;

// Port for catalog storage used by product use cases.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn insert(&self, product: Product) -> Result<(), String>;
    async fn get(&self, id: &str) -> Result<Option<Product>, String>;
    async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>, String>;
    async fn list(&self) -> Result<Vec<Product>, String>;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now_epoch_seconds(&self) -> u64;
}
