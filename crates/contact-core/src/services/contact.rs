/// Contact request handling: parse, validate, compose, deliver
use crate::constants::SUCCESS_MESSAGE;
use crate::email::compose_contact_email;
use crate::error::ContactError;
use crate::models::{ContactResponse, RawSubmission};
use crate::services::config::ContactConfig;
use crate::services::ses::EmailSender;
use crate::utils::logging::{redact_body, redact_email};
use crate::utils::validation::validate_submission;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct ContactService {
    config: ContactConfig,
    sender: Arc<dyn EmailSender>,
}

impl ContactService {
    pub fn new(config: ContactConfig, sender: Arc<dyn EmailSender>) -> Self {
        Self { config, sender }
    }

    /// Handles one submission body.
    ///
    /// Exactly one delivery attempt is made per call once validation passes;
    /// identical bodies are not deduplicated.
    pub async fn submit(&self, body: &[u8]) -> Result<ContactResponse, ContactError> {
        let raw = RawSubmission::from_body(body).inspect_err(|e| {
            warn!(error = %e, "Rejected request body");
        })?;

        let submission = validate_submission(&raw, self.config.validation).inspect_err(|e| {
            warn!(reason = %e.client_message(), "Validation failed");
        })?;

        info!(
            email = %redact_email(&submission.email),
            "Validation passed"
        );

        let email = compose_contact_email(&submission, &self.config);
        let message_id = self.sender.send_email(&email).await?;

        info!(
            email = %redact_email(&submission.email),
            message_id = %message_id,
            body = %redact_body(&email.body),
            "Email sent successfully"
        );

        Ok(ContactResponse::success(SUCCESS_MESSAGE))
    }
}
