#[tokio::main]
async fn main() {
    if let Err(err) = ra_api::run().await {
        tracing::error!(error = %err, "ra-api failed");
        std::process::exit(1);
    }
}
