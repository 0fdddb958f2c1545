// Domain-level errors for catalog workflows.
#[derive(Debug)]
pub enum ProductError {
    InvalidName,
    InvalidSku,
    InvalidPrice,
    DuplicateSku,
    NotFound,
    StorageFailure,
}
