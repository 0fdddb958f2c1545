use serde::{Deserialize, Serialize};

use crate::domain::entities::User;

// Request payload for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub display_name: String,
    pub email: String,
}

// Response payload for a single account.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub created_at: u64,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            display_name: user.display_name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

// Response payload for the account listing.
#[derive(Debug, Serialize)]
pub struct ListUsersResponse {
    pub users: Vec<UserResponse>,
}

// Response payload for the health probe.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
