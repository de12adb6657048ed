/// Error types for the contact form system
use crate::constants::{CONFIG_ERROR_MESSAGE, DELIVERY_FAILED_MESSAGE};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ContactError {
    /// HTTP status code for this error category
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest(_) => 400,
            Self::Validation(_) => 400,
            Self::Delivery(_) => 500,
            Self::Config(_) => 500,
        }
    }

    /// Message that is safe to return to the caller.
    ///
    /// Delivery and configuration details stay in the logs.
    pub fn client_message(&self) -> &str {
        match self {
            Self::InvalidRequest(msg) | Self::Validation(msg) => msg,
            Self::Delivery(_) => DELIVERY_FAILED_MESSAGE,
            Self::Config(_) => CONFIG_ERROR_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ContactError::Validation("x".to_string()).status_code(), 400);
        assert_eq!(
            ContactError::InvalidRequest("x".to_string()).status_code(),
            400
        );
        assert_eq!(ContactError::Delivery("x".to_string()).status_code(), 500);
        assert_eq!(ContactError::Config("x".to_string()).status_code(), 500);
    }

    #[test]
    fn test_client_message_does_not_leak_delivery_detail() {
        let err = ContactError::Delivery("Throttling: Maximum sending rate exceeded".to_string());
        assert_eq!(err.client_message(), "Failed to send email");
        assert!(err.to_string().contains("Throttling"));
    }

    #[test]
    fn test_client_message_passes_validation_reason() {
        let err = ContactError::Validation("Invalid name".to_string());
        assert_eq!(err.client_message(), "Invalid name");
    }
}
