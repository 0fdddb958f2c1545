use async_trait::async_trait;

use crate::domain::entities::User;

// Port for account storage used by user use cases.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: User) -> Result<(), String>;
    async fn get(&self, id: &str) -> Result<Option<User>, String>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String>;
    async fn list(&self) -> Result<Vec<User>, String>;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now_epoch_seconds(&self) -> u64;
}
