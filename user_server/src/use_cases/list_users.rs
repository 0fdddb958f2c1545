use crate::domain::entities::User;
use crate::domain::errors::UserError;
use crate::domain::ports::UserStore;

// List registered users in a stable order.
pub struct ListUsersUseCase<S> {
    pub store: S,
}

impl<S> ListUsersUseCase<S>
where
    S: UserStore,
{
    pub async fn execute(&self) -> Result<Vec<User>, UserError> {
        let mut users = self
            .store
            .list()
            .await
            .map_err(|_| UserError::StorageFailure)?;

        // Registration order first; ids break ties between same-second signups.
        users.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(users)
    }
}
