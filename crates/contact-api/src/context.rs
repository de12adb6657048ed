/// API Context - resources shared by all invocations
use contact_core::services::SesEmailSender;
use contact_core::{ContactConfig, ContactService, EmailSender};
use lambda_http::Error;
use std::sync::Arc;

#[derive(Clone)]
pub struct ApiContext {
    pub contact: ContactService,
}

impl ApiContext {
    /// Loads configuration and the SES client once per cold start
    pub async fn new() -> Result<Arc<Self>, Error> {
        let config = ContactConfig::from_env()?;

        let aws_config = aws_config::load_from_env().await;
        let ses_client = aws_sdk_ses::Client::new(&aws_config);

        Ok(Self::with_sender(config, Arc::new(SesEmailSender::new(ses_client))))
    }

    /// Context with an arbitrary delivery client
    pub fn with_sender(config: ContactConfig, sender: Arc<dyn EmailSender>) -> Arc<Self> {
        Arc::new(Self {
            contact: ContactService::new(config, sender),
        })
    }
}
