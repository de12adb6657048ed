/// Builds the notification email for a validated submission
use crate::constants::{PHONE_NOT_PROVIDED, SUBJECT_PREFIX};
use crate::models::{ContactEmail, ContactSubmission};
use crate::services::config::ContactConfig;

pub fn compose_subject(submission: &ContactSubmission) -> String {
    format!("{} {}", SUBJECT_PREFIX, submission.name)
}

/// One field per line, then the message after a blank line
pub fn compose_body(submission: &ContactSubmission) -> String {
    let phone = submission.phone.as_deref().unwrap_or(PHONE_NOT_PROVIDED);

    format!(
        "Name: {}\nEmail: {}\nPhone: {}\n\nMessage:\n{}\n",
        submission.name, submission.email, phone, submission.message
    )
}

pub fn compose_contact_email(submission: &ContactSubmission, config: &ContactConfig) -> ContactEmail {
    ContactEmail {
        from: config.sender_email.clone(),
        to: vec![config.recipient_email.clone()],
        reply_to: submission.reply_to.clone(),
        subject: compose_subject(submission),
        body: compose_body(submission),
    }
}
