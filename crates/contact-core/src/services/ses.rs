/// SES email sending service
use crate::constants::EMAIL_CHARSET;
use crate::error::ContactError;
use crate::models::ContactEmail;
use async_trait::async_trait;
use aws_sdk_ses::error::ProvideErrorMetadata;
use aws_sdk_ses::types::{Body, Content, Destination, Message};

/// Capability to deliver a composed email, returning the provider message id
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, email: &ContactEmail) -> Result<String, ContactError>;
}

pub struct SesEmailSender {
    client: aws_sdk_ses::Client,
}

impl SesEmailSender {
    pub fn new(client: aws_sdk_ses::Client) -> Self {
        Self { client }
    }
}

fn utf8_content(data: &str) -> Result<Content, ContactError> {
    Content::builder()
        .data(data)
        .charset(EMAIL_CHARSET)
        .build()
        .map_err(|e| ContactError::Delivery(format!("Failed to build message content: {}", e)))
}

#[async_trait]
impl EmailSender for SesEmailSender {
    async fn send_email(&self, email: &ContactEmail) -> Result<String, ContactError> {
        let destination = Destination::builder()
            .set_to_addresses(Some(email.to.clone()))
            .build();

        let message = Message::builder()
            .subject(utf8_content(&email.subject)?)
            .body(Body::builder().text(utf8_content(&email.body)?).build())
            .build();

        let response = self
            .client
            .send_email()
            .source(&email.from)
            .destination(destination)
            .message(message)
            .set_reply_to_addresses(email.reply_to.clone().map(|address| vec![address]))
            .send()
            .await
            .map_err(|e| {
                let service_error = e.into_service_error();
                let code = service_error.code().unwrap_or("Unknown").to_string();
                let detail = service_error.message().unwrap_or_default().to_string();

                tracing::error!(
                    error_code = %code,
                    error_message = %detail,
                    "SES send_email failed"
                );
                ContactError::Delivery(format!("{}: {}", code, detail))
            })?;

        let message_id = response.message_id;

        tracing::info!(message_id = %message_id, "Sent email via SES");
        Ok(message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ses::config::{BehaviorVersion, Credentials, Region, retry::RetryConfig};
    use wiremock::matchers::{body_string_contains, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SEND_EMAIL_OK: &str = r#"<SendEmailResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
  <SendEmailResult>
    <MessageId>0100018c-test-message-id</MessageId>
  </SendEmailResult>
  <ResponseMetadata>
    <RequestId>d5964849-c866-11e0-9beb-01a62d68c57f</RequestId>
  </ResponseMetadata>
</SendEmailResponse>"#;

    const MESSAGE_REJECTED: &str = r#"<ErrorResponse xmlns="http://ses.amazonaws.com/doc/2010-12-01/">
  <Error>
    <Type>Sender</Type>
    <Code>MessageRejected</Code>
    <Message>Email address is not verified.</Message>
  </Error>
  <RequestId>b0a1f3a2-0000-0000-0000-000000000000</RequestId>
</ErrorResponse>"#;

    fn client_for(server: &MockServer) -> aws_sdk_ses::Client {
        let config = aws_sdk_ses::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::new("AKIDTEST", "secret", None, None, "test"))
            .endpoint_url(server.uri())
            .retry_config(RetryConfig::disabled())
            .build();
        aws_sdk_ses::Client::from_conf(config)
    }

    fn email() -> ContactEmail {
        ContactEmail {
            from: "noreply@example.com".to_string(),
            to: vec!["admin@example.com".to_string()],
            reply_to: Some("john@example.com".to_string()),
            subject: "New Contact Form Submission from John Doe".to_string(),
            body: "Name: John Doe\n".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_email_returns_message_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("Action=SendEmail"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/xml")
                    .set_body_string(SEND_EMAIL_OK),
            )
            .expect(1)
            .mount(&server)
            .await;

        let sender = SesEmailSender::new(client_for(&server));
        let message_id = sender.send_email(&email()).await.unwrap();

        assert_eq!(message_id, "0100018c-test-message-id");
    }

    #[tokio::test]
    async fn test_rejection_becomes_delivery_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400)
                    .insert_header("content-type", "text/xml")
                    .set_body_string(MESSAGE_REJECTED),
            )
            .mount(&server)
            .await;

        let sender = SesEmailSender::new(client_for(&server));
        let err = sender.send_email(&email()).await.unwrap_err();

        assert!(matches!(err, ContactError::Delivery(_)));
        assert!(err.to_string().contains("MessageRejected"));
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.client_message(), "Failed to send email");
    }
}
