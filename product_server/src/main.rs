#[tokio::main]
async fn main() {
    if let Err(error) = product_server::run().await {
        tracing::error!(%error, "fatal");
        std::process::exit(1);
    }
}
