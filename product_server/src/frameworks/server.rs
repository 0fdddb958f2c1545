use bootstrap::ServeError;
use tokio::net::TcpListener;

use crate::frameworks::{config, seed};
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;

// Build the application state, applying the optional seed file. A seed
// failure is fatal and happens before any listener exists.
async fn build_state() -> Result<AppState, ServeError> {
    let state = AppState::new();

    if let Some(path) = config::seed_path() {
        let count = seed::apply_seed(&state, &path)
            .await
            .map_err(ServeError::startup)?;
        tracing::info!(count, path = %path.display(), "seed applied");
    }

    Ok(state)
}

// Process entry point: load env, install tracing, then bind and serve.
pub async fn run() -> Result<(), ServeError> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    bootstrap::init_tracing();

    let service_config = config::service_config();
    let state = build_state().await?;
    let app = routes::app(state);

    bootstrap::run(&service_config, app).await
}

// Serve on an already-bound listener; used by the integration tests.
pub async fn serve(listener: TcpListener) -> Result<(), ServeError> {
    let state = build_state().await?;
    let app = routes::app(state);

    bootstrap::serve(listener, app).await
}
