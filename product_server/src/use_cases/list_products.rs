use crate::domain::entities::Product;
use crate::domain::errors::ProductError;
use crate::domain::ports::ProductStore;

// List the whole catalog in a stable order.
pub struct ListProductsUseCase<S> {
    pub store: S,
}

impl<S> ListProductsUseCase<S>
where
    S: ProductStore,
{
    pub async fn execute(&self) -> Result<Vec<Product>, ProductError> {
        let mut products = self
            .store
            .list()
            .await
            .map_err(|_| ProductError::StorageFailure)?;

        // Stable ordering for clients regardless of map iteration order.
        products.sort_by(|a, b| a.sku.cmp(&b.sku));

        Ok(products)
    }
}
