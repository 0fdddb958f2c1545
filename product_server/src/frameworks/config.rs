use bootstrap::ServiceConfig;
use std::env;
use std::path::PathBuf;

// Runtime/server constants for the product process.

pub const SERVICE_NAME: &str = "product_server";
pub const DEFAULT_PORT: u16 = 5001;

pub fn service_config() -> ServiceConfig {
    ServiceConfig::from_env(SERVICE_NAME, "PRODUCT_SERVER_PORT", DEFAULT_PORT)
}

// Optional TOML file of catalog entries applied before the listener binds.
pub fn seed_path() -> Option<PathBuf> {
    env::var("PRODUCT_SEED_PATH").ok().map(PathBuf::from)
}
