/// API Error types
use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use contact_core::{ContactError, ContactResponse};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Contact(#[from] ContactError),

    #[error("Request body rejected: {0}")]
    Body(#[from] BytesRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Contact(err) => (
                StatusCode::from_u16(err.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                err.client_message().to_string(),
            ),
            ApiError::Body(rejection) => {
                let status = rejection.status();
                let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
                    "Request body too large"
                } else {
                    "Invalid request body"
                };
                tracing::warn!(status = %status.as_u16(), error = %rejection, "Request body rejected");
                (status, message.to_string())
            }
        };

        (status, Json(ContactResponse::failure(message))).into_response()
    }
}
