pub mod config;
pub mod error;
pub mod server;

pub use config::ServiceConfig;
pub use error::ServeError;
pub use server::{bind, init_tracing, run, serve};
