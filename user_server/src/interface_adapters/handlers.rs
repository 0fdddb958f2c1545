use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::errors::UserError;
use crate::frameworks::config::SERVICE_NAME;
use crate::interface_adapters::protocol::{
    ErrorResponse, HealthResponse, ListUsersResponse, RegisterUserRequest, UserResponse,
};
use crate::interface_adapters::state::{AppState, InMemoryUserStore, SystemClock};
use crate::use_cases::get_user::GetUserUseCase;
use crate::use_cases::list_users::ListUsersUseCase;
use crate::use_cases::register_user::{NewUser, RegisterUserUseCase};

// Health probe used by orchestration and the smoke tests.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
    })
}

// Handler for registering an account.
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), (StatusCode, Json<ErrorResponse>)> {
    let use_case = RegisterUserUseCase {
        clock: SystemClock,
        store: store(&state),
    };

    let user = use_case
        .execute(NewUser {
            display_name: payload.display_name,
            email: payload.email,
        })
        .await
        .map_err(map_user_error)?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

// Handler for fetching one account.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = GetUserUseCase {
        store: store(&state),
    };

    let user = use_case.execute(&id).await.map_err(map_user_error)?;

    Ok(Json(user.into()))
}

// Handler for listing registered accounts.
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ListUsersResponse>, (StatusCode, Json<ErrorResponse>)> {
    let use_case = ListUsersUseCase {
        store: store(&state),
    };

    let users = use_case.execute().await.map_err(map_user_error)?;

    Ok(Json(ListUsersResponse {
        users: users.into_iter().map(Into::into).collect(),
    }))
}

fn store(state: &AppState) -> InMemoryUserStore {
    InMemoryUserStore {
        users: state.users.clone(),
    }
}

// Map domain errors onto the HTTP error envelope.
fn map_user_error(error: UserError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, message) = match error {
        UserError::InvalidDisplayName => (StatusCode::BAD_REQUEST, "invalid display_name"),
        UserError::InvalidEmail => (StatusCode::BAD_REQUEST, "invalid email"),
        UserError::DuplicateEmail => (StatusCode::CONFLICT, "email already registered"),
        UserError::NotFound => (StatusCode::NOT_FOUND, "user not found"),
        UserError::StorageFailure => (StatusCode::INTERNAL_SERVER_ERROR, "storage failure"),
    };

    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}
