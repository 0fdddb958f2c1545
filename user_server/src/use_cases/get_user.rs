use crate::domain::entities::User;
use crate::domain::errors::UserError;
use crate::domain::ports::UserStore;

// Fetch-one use case keyed by user id.
pub struct GetUserUseCase<S> {
    pub store: S,
}

impl<S> GetUserUseCase<S>
where
    S: UserStore,
{
    pub async fn execute(&self, id: &str) -> Result<User, UserError> {
        self.store
            .get(id)
            .await
            .map_err(|_| UserError::StorageFailure)?
            .ok_or(UserError::NotFound)
    }
}
