use axum::{
    Router,
    routing::{get, post},
};

use crate::interface_adapters::handlers::{get_user, health, list_users, register_user};
use crate::interface_adapters::state::AppState;

// Build the HTTP router for the user service. The state is passed in
// explicitly so tests can mount several isolated instances in one process.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/users", get(list_users))
        .route("/users", post(register_user))
        .route("/users/{id}", get(get_user))
        .with_state(state)
}
