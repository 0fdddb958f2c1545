use bootstrap::ServiceConfig;
use std::env;
use std::path::PathBuf;

// Runtime/server constants for the user process.

pub const SERVICE_NAME: &str = "user_server";
pub const DEFAULT_PORT: u16 = 5002;

pub fn service_config() -> ServiceConfig {
    ServiceConfig::from_env(SERVICE_NAME, "USER_SERVER_PORT", DEFAULT_PORT)
}

// Optional TOML file of accounts applied before the listener binds.
pub fn seed_path() -> Option<PathBuf> {
    env::var("USER_SEED_PATH").ok().map(PathBuf::from)
}
