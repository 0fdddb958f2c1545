use crate::config::ServiceConfig;
use crate::error::ServeError;
use axum::Router;
use tokio::net::TcpListener;

// Install the process-wide tracing subscriber and panic hook. Call once,
// from the binary entry point only; tests exercising the serve path skip it.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// Bind exactly the configured address. A conflict is a fatal BindError,
// never a fallback to another port.
pub async fn bind(config: &ServiceConfig) -> Result<TcpListener, ServeError> {
    let addr = config.socket_addr();
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })
}

// Serve `app` on an already-bound listener until the process terminates.
// Does not return under normal operation.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServeError> {
    let addr = listener.local_addr().map_err(ServeError::Serve)?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app).await.map_err(ServeError::Serve)
}

// The whole bootstrap: bind the configured address, then serve forever.
pub async fn run(config: &ServiceConfig, app: Router) -> Result<(), ServeError> {
    tracing::info!(service = config.service, port = config.port, "starting");
    let listener = bind(config).await?;
    serve(listener, app).await
}
