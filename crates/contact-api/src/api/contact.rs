/// Contact form submission endpoint
use axum::{Json, body::Bytes, extract::State, extract::rejection::BytesRejection};
use contact_core::ContactResponse;
use std::sync::Arc;

use crate::{context::ApiContext, error::ApiError};

/// Submit the contact form
///
/// The raw body is taken as bytes so malformed JSON and oversized bodies
/// map to the form's own error envelope instead of axum's rejection.
pub async fn submit(
    State(ctx): State<Arc<ApiContext>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let body = body?;
    let response = ctx.contact.submit(&body).await?;
    Ok(Json(response))
}
