use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::entities::Product;
use crate::domain::ports::{Clock, ProductStore};

// Fixed time source so timestamp assertions are deterministic.
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_epoch_seconds(&self) -> u64 {
        self.0
    }
}

// In-memory store fake with failure toggles for negative-path tests.
#[derive(Clone, Default)]
pub struct RecordingStore {
    pub products: Arc<Mutex<HashMap<String, Product>>>,
    pub fail_insert: bool,
    pub fail_reads: bool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(self, product: Product) -> Self {
        {
            let mut guard = self.products.lock().expect("products mutex poisoned");
            guard.insert(product.id.clone(), product);
        }
        self
    }
}

#[async_trait]
impl ProductStore for RecordingStore {
    async fn insert(&self, product: Product) -> Result<(), String> {
        if self.fail_insert {
            return Err("insert failed".to_string());
        }
        let mut guard = self.products.lock().expect("products mutex poisoned");
        guard.insert(product.id.clone(), product);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Product>, String> {
        if self.fail_reads {
            return Err("read failed".to_string());
        }
        let guard = self.products.lock().expect("products mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>, String> {
        if self.fail_reads {
            return Err("read failed".to_string());
        }
        let guard = self.products.lock().expect("products mutex poisoned");
        Ok(guard.values().find(|product| product.sku == sku).cloned())
    }

    async fn list(&self) -> Result<Vec<Product>, String> {
        if self.fail_reads {
            return Err("read failed".to_string());
        }
        let guard = self.products.lock().expect("products mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

// Convenience builder for store-seeded products in tests.
pub fn product(id: &str, sku: &str) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {id}"),
        sku: sku.to_string(),
        price_cents: 1000,
        created_at: 1_700_000_000,
    }
}
