use contact_api::ApiContext;
use lambda_http::{Error, Request, run, service_fn};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| match std::env::var("LOG_LEVEL") {
            Ok(level) if !level.trim().is_empty() => EnvFilter::try_new(level.to_lowercase()),
            _ => Ok(EnvFilter::new("info")),
        })
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_current_span(true)
        .init();

    info!("Starting contact form Lambda function");

    let ctx = ApiContext::new().await?;

    run(service_fn(|event: Request| {
        let ctx = ctx.clone();
        async move { contact_api::handler(ctx, event).await }
    }))
    .await
}
