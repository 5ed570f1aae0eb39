use std::sync::Arc;

use snipbin_lambda::config::Config;
use snipbin_lambda::state::AppState;
use snipbin_storage::s3::S3SnippetRepository;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;
    let validator = config.validator()?;

    let s3 = match &config.region {
        Some(region) => snipbin_storage::client::build_client_with_region(region).await,
        None => snipbin_storage::client::build_client().await,
    };
    let repository = S3SnippetRepository::new(s3, config.bucket.clone());

    tracing::info!(
        bucket = %config.bucket,
        contents_character_limit = config.contents_character_limit,
        "starting snipbin"
    );

    let app = snipbin_lambda::router(AppState::new(Arc::new(repository), validator));

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
