use crate::domain::entities::Product;
use crate::domain::errors::ProductError;
use crate::domain::ports::ProductStore;

// Fetch-one use case keyed by product id.
pub struct GetProductUseCase<S> {
    pub store: S,
}

impl<S> GetProductUseCase<S>
where
    S: ProductStore,
{
    pub async fn execute(&self, id: &str) -> Result<Product, ProductError> {
        self.store
            .get(id)
            .await
            .map_err(|_| ProductError::StorageFailure)?
            .ok_or(ProductError::NotFound)
    }
}
