use uuid::Uuid;

use crate::domain::entities::Product;
use crate::domain::errors::ProductError;
use crate::domain::ports::{Clock, ProductStore};

// Input accepted by the create-product use case.
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub price_cents: u64,
}

// Create-product use case with injected dependencies.
pub struct CreateProductUseCase<C, S> {
    pub clock: C,
    pub store: S,
}

impl<C, S> CreateProductUseCase<C, S>
where
    C: Clock,
    S: ProductStore,
{
    pub async fn execute(&self, input: NewProduct) -> Result<Product, ProductError> {
        let name = validate_name(&input.name)?;
        let sku = validate_sku(&input.sku)?;
        if input.price_cents == 0 {
            return Err(ProductError::InvalidPrice);
        }

        // SKUs are the external identity of a catalog entry; refuse reuse.
        let existing = self
            .store
            .find_by_sku(&sku)
            .await
            .map_err(|_| ProductError::StorageFailure)?;
        if existing.is_some() {
            return Err(ProductError::DuplicateSku);
        }

        let product = Product {
            id: Uuid::new_v4().to_string(),
            name,
            sku,
            price_cents: input.price_cents,
            created_at: self.clock.now_epoch_seconds(),
        };

        self.store
            .insert(product.clone())
            .await
            .map_err(|_| ProductError::StorageFailure)?;

        Ok(product)
    }
}

fn validate_name(value: &str) -> Result<String, ProductError> {
    const MAX_LEN: usize = 80;

    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_LEN {
        return Err(ProductError::InvalidName);
    }

    Ok(trimmed.to_string())
}

fn validate_sku(value: &str) -> Result<String, ProductError> {
    // Keep SKUs compact and safe to embed in URLs and logs.
    const MIN_LEN: usize = 3;
    const MAX_LEN: usize = 24;

    let len = value.chars().count();
    if !(MIN_LEN..=MAX_LEN).contains(&len) {
        return Err(ProductError::InvalidSku);
    }

    if !value
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ProductError::InvalidSku);
    }

    Ok(value.to_string())
}
