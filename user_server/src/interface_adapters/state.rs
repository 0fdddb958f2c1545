use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;

use crate::domain::entities::User;
use crate::domain::ports::{Clock, UserStore};

// Application state holding the in-memory account registry. Constructed by
// the bootstrap and handed to the router; there is no process-global instance.
#[derive(Clone, Default)]
pub struct AppState {
    pub users: Arc<Mutex<HashMap<String, User>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

// In-memory account adapter for the user service.
#[derive(Clone)]
pub struct InMemoryUserStore {
    pub users: Arc<Mutex<HashMap<String, User>>>,
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: User) -> Result<(), String> {
        let mut users = self.users.lock().await;
        users.insert(user.id.clone(), user);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<User>, String> {
        let users = self.users.lock().await;
        Ok(users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String> {
        let users = self.users.lock().await;
        Ok(users.values().find(|user| user.email == email).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, String> {
        let users = self.users.lock().await;
        Ok(users.values().cloned().collect())
    }
}

// System clock adapter used by user use cases.
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
