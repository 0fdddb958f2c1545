use std::io;
use std::net::SocketAddr;
use thiserror::Error;

// Fatal startup/serve failures. None of these are retried; the process logs
// the error and exits non-zero.
#[derive(Debug, Error)]
pub enum ServeError {
    // The configured port could not be bound (already in use, or the process
    // lacks the privilege). The port is never silently swapped for a free one.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    // The route set's state could not be initialized before mounting.
    #[error("startup failed: {0}")]
    Startup(String),

    // The accept loop itself failed after a successful bind.
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

impl ServeError {
    pub fn startup(message: impl Into<String>) -> Self {
        Self::Startup(message.into())
    }
}
