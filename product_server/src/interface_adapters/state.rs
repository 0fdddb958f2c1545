use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;

use crate::domain::entities::Product;
use crate::domain::ports::{Clock, ProductStore};

// Application state holding the in-memory catalog. Constructed by the
// bootstrap and handed to the router; there is no process-global instance.
#[derive(Clone, Default)]
pub struct AppState {
    pub products: Arc<Mutex<HashMap<String, Product>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

// In-memory catalog adapter for the product service.
#[derive(Clone)]
pub struct InMemoryProductStore {
    pub products: Arc<Mutex<HashMap<String, Product>>>,
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn insert(&self, product: Product) -> Result<(), String> {
        let mut products = self.products.lock().await;
        products.insert(product.id.clone(), product);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Product>, String> {
        let products = self.products.lock().await;
        Ok(products.get(id).cloned())
    }

    async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>, String> {
        let products = self.products.lock().await;
        Ok(products.values().find(|product| product.sku == sku).cloned())
    }

    async fn list(&self) -> Result<Vec<Product>, String> {
        let products = self.products.lock().await;
        Ok(products.values().cloned().collect())
    }
}

// System clock adapter used by product use cases.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}
