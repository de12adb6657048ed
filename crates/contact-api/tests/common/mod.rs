//! Common test utilities for the contact form Lambda
#![allow(dead_code)]

use async_trait::async_trait;
use contact_api::ApiContext;
use contact_core::utils::validation::ValidationRules;
use contact_core::{ContactConfig, ContactEmail, ContactError, ContactResponse, EmailSender};
use lambda_http::{Body, Request, Response};
use std::sync::{Arc, Mutex};

pub const VALID_SUBMISSION: &str = r#"{"name":"John Doe","email":"john@example.com","phone":"555-123-4567","message":"Hello, this is a test message"}"#;

/// Delivery client that records every email and answers with a fixed outcome
#[derive(Clone, Default)]
pub struct RecordingSender {
    pub sent_emails: Arc<Mutex<Vec<ContactEmail>>>,
    pub fail_with: Option<String>,
}

impl RecordingSender {
    pub fn failing(detail: &str) -> Self {
        Self {
            fail_with: Some(detail.to_string()),
            ..Self::default()
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent_emails.lock().unwrap().len()
    }

    pub fn last_email(&self) -> Option<ContactEmail> {
        self.sent_emails.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl EmailSender for RecordingSender {
    async fn send_email(&self, email: &ContactEmail) -> Result<String, ContactError> {
        self.sent_emails.lock().unwrap().push(email.clone());
        match &self.fail_with {
            Some(detail) => Err(ContactError::Delivery(detail.clone())),
            None => Ok(format!("test-message-{}", self.sent_count())),
        }
    }
}

pub fn test_config() -> ContactConfig {
    ContactConfig {
        recipient_email: "admin@example.com".to_string(),
        sender_email: "noreply@example.com".to_string(),
        validation: ValidationRules::default(),
    }
}

pub fn context_with(sender: Arc<dyn EmailSender>) -> Arc<ApiContext> {
    ApiContext::with_sender(test_config(), sender)
}

pub fn post_contact(body: impl Into<Body>) -> Request {
    http::Request::builder()
        .method("POST")
        .uri("/contact")
        .header("content-type", "application/json")
        .header("origin", "https://www.example.com")
        .body(body.into())
        .unwrap()
}

pub fn parse_response(response: &Response<Body>) -> ContactResponse {
    serde_json::from_slice(&response.body().to_vec()).unwrap()
}
