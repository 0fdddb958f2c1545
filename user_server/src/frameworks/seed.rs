use serde::Deserialize;
use std::path::Path;

use crate::interface_adapters::state::{AppState, InMemoryUserStore, SystemClock};
use crate::use_cases::register_user::{NewUser, RegisterUserUseCase};

// On-disk seed format: a TOML file of [[users]] entries.
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    users: Vec<SeedUser>,
}

#[derive(Debug, Deserialize)]
struct SeedUser {
    display_name: String,
    email: String,
}

// Load seed entries through the registration use case so they pass the same
// validation as API-registered accounts. Any failure aborts startup.
pub async fn apply_seed(state: &AppState, path: &Path) -> Result<usize, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|error| format!("failed to read seed file {}: {error}", path.display()))?;
    let seed: SeedFile = toml::from_str(&raw)
        .map_err(|error| format!("failed to parse seed file {}: {error}", path.display()))?;

    let use_case = RegisterUserUseCase {
        clock: SystemClock,
        store: InMemoryUserStore {
            users: state.users.clone(),
        },
    };

    let count = seed.users.len();
    for entry in seed.users {
        let email = entry.email.clone();
        use_case
            .execute(NewUser {
                display_name: entry.display_name,
                email: entry.email,
            })
            .await
            .map_err(|error| format!("invalid seed entry {email}: {error:?}"))?;
    }

    Ok(count)
}
