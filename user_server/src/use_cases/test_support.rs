use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::entities::User;
use crate::domain::ports::{Clock, UserStore};

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
    pub users: Arc<Mutex<HashMap<String, User>>>,
    pub fail_insert: bool,
    pub fail_reads: bool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, user: User) -> Self {
        {
            let mut guard = self.users.lock().expect("users mutex poisoned");
            guard.insert(user.id.clone(), user);
        }
        self
    }
}

#[async_trait]
impl UserStore for RecordingStore {
    async fn insert(&self, user: User) -> Result<(), String> {
        if self.fail_insert {
            return Err("insert failed".to_string());
        }
        let mut guard = self.users.lock().expect("users mutex poisoned");
        guard.insert(user.id.clone(), user);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<User>, String> {
        if self.fail_reads {
            return Err("read failed".to_string());
        }
        let guard = self.users.lock().expect("users mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String> {
        if self.fail_reads {
            return Err("read failed".to_string());
        }
        let guard = self.users.lock().expect("users mutex poisoned");
        Ok(guard.values().find(|user| user.email == email).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, String> {
        if self.fail_reads {
            return Err("read failed".to_string());
        }
        let guard = self.users.lock().expect("users mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

// Convenience builder for store-seeded users in tests.
pub fn user(id: &str, email: &str) -> User {
    User {
        id: id.to_string(),
        display_name: format!("User {id}"),
        email: email.to_string(),
        created_at: 1_700_000_000,
    }
}
