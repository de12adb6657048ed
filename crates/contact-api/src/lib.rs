/// Contact API - contact form Lambda behind API Gateway
///
/// This module wires the HTTP surface of the contact form: routing, CORS,
/// request logging and the conversion between Lambda and axum types.
pub mod api;
pub mod context;
pub mod error;
pub mod middleware;

pub use context::ApiContext;
pub use error::ApiError;

use axum::{
    Router,
    body::Body as AxumBody,
    extract::DefaultBodyLimit,
    http::{Method, header},
    middleware as axum_middleware,
    routing::post,
};
use contact_core::ContactResponse;
use contact_core::constants::INTERNAL_ERROR_MESSAGE;
use lambda_http::{Body, Error as LambdaError, Request, Response};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

/// Contact form submissions are small
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Builds the axum router serving the contact form
pub fn router(ctx: Arc<ApiContext>) -> Router {
    Router::new()
        .route("/contact", post(api::contact::submit))
        .route("/", post(api::contact::submit))
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Preflight answered here, every response gets the wildcard origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(ctx)
}

/// Main Lambda handler - converts the Lambda HTTP request to an axum request
pub async fn handler(ctx: Arc<ApiContext>, event: Request) -> Result<Response<Body>, LambdaError> {
    let app = router(ctx);

    let (parts, body) = event.into_parts();
    let body_bytes = body.to_vec();

    let axum_request = http::Request::from_parts(parts, AxumBody::from(body_bytes));

    match app.oneshot(axum_request).await {
        Ok(response) => {
            let (parts, body) = response.into_parts();

            let body_bytes = axum::body::to_bytes(body, usize::MAX)
                .await
                .unwrap_or_default();

            Ok(Response::from_parts(parts, Body::from(body_bytes.to_vec())))
        }
        Err(err) => {
            error!("Axum router error: {}", err);
            let body = serde_json::to_string(&ContactResponse::failure(INTERNAL_ERROR_MESSAGE))?;
            let response = Response::builder()
                .status(500)
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")
                .body(Body::from(body))
                .map_err(Box::new)?;
            Ok(response)
        }
    }
}
