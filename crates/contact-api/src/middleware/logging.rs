/// Request logging middleware
use axum::{extract::Request, middleware::Next, response::Response};
use lambda_http::Context;
use std::time::Instant;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

/// Lambda request id, or a generated one outside of Lambda
pub fn request_id(request: &Request) -> String {
    request
        .extensions()
        .get::<Context>()
        .map(|ctx| ctx.request_id.clone())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Runs the request inside a span carrying the request id and logs the
/// outcome with status code and duration.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = request_id(&request);
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = info_span!("request", request_id = %request_id);

    async move {
        info!(method = %method, path = %path, "Processing contact form request");

        let response = next.run(request).await;

        let duration = start.elapsed();
        let status = response.status();

        if status.is_success() {
            info!(
                status = %status.as_u16(),
                duration_ms = %duration.as_millis(),
                "Request completed"
            );
        } else {
            warn!(
                status = %status.as_u16(),
                duration_ms = %duration.as_millis(),
                "Request failed"
            );
        }

        response
    }
    .instrument(span)
    .await
}
