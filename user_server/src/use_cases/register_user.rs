use uuid::Uuid;

use crate::domain::entities::User;
use crate::domain::errors::UserError;
use crate::domain::ports::{Clock, UserStore};

// Input accepted by the registration use case.
pub struct NewUser {
    pub display_name: String,
    pub email: String,
}

// Registration use case with injected dependencies.
pub struct RegisterUserUseCase<C, S> {
    pub clock: C,
    pub store: S,
}

impl<C, S> RegisterUserUseCase<C, S>
where
    C: Clock,
    S: UserStore,
{
    pub async fn execute(&self, input: NewUser) -> Result<User, UserError> {
        let display_name = validate_display_name(&input.display_name)?;
        let email = validate_email(&input.email)?;

        let existing = self
            .store
            .find_by_email(&email)
            .await
            .map_err(|_| UserError::StorageFailure)?;
        if existing.is_some() {
            return Err(UserError::DuplicateEmail);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            display_name,
            email,
            created_at: self.clock.now_epoch_seconds(),
        };

        self.store
            .insert(user.clone())
            .await
            .map_err(|_| UserError::StorageFailure)?;

        Ok(user)
    }
}

fn validate_display_name(value: &str) -> Result<String, UserError> {
    // Keep names compact and readable for UI and logs.
    const MIN_LEN: usize = 3;
    const MAX_LEN: usize = 32;

    let len = value.chars().count();
    if !(MIN_LEN..=MAX_LEN).contains(&len) {
        return Err(UserError::InvalidDisplayName);
    }
    if value.trim() != value {
        return Err(UserError::InvalidDisplayName);
    }

    // Allow a simple safe charset across the stack.
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-'))
    {
        return Err(UserError::InvalidDisplayName);
    }

    Ok(value.to_string())
}

fn validate_email(value: &str) -> Result<String, UserError> {
    const MAX_LEN: usize = 254;

    if value.len() > MAX_LEN || value.chars().any(char::is_whitespace) {
        return Err(UserError::InvalidEmail);
    }

    let Some((local, domain)) = value.split_once('@') else {
        return Err(UserError::InvalidEmail);
    };
    // split_once cuts at the first '@'; a second one lands in the domain.
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(UserError::InvalidEmail);
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(UserError::InvalidEmail);
    }

    // Canonical form: lowercase, so duplicate checks are case-insensitive.
    Ok(value.to_ascii_lowercase())
}
