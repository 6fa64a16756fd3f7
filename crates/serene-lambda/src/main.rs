use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use serene_lambda::app;
use serene_lambda::config::ApiConfig;
use serene_lambda::state::AppState;
use serene_storage::results::S3ResultStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env();
    let verifier = config.token_verifier()?.map(Arc::new);

    let s3 = serene_storage::client::build_client_with_region(&config.region).await;
    let state = AppState {
        results: S3ResultStore::new(s3, config.bucket.clone()),
        verifier,
    };

    tracing::info!(bucket = %config.bucket, "serene api starting");
    lambda_http::run(app(state)).await.map_err(|e| eyre::eyre!(e))
}
