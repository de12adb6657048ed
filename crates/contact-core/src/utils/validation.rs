/// Field validation for contact form submissions
use crate::constants::{
    INVALID_EMAIL_MESSAGE, INVALID_MESSAGE_MESSAGE, INVALID_NAME_MESSAGE, INVALID_PHONE_MESSAGE,
    MAX_EMAIL_LENGTH, MAX_EMAIL_LOCAL_PART_LENGTH, MAX_MESSAGE_LENGTH, MAX_NAME_LENGTH,
    MAX_PHONE_DIGITS, MIN_MESSAGE_LENGTH, MIN_NAME_LENGTH, MIN_PHONE_DIGITS,
};
use crate::error::ContactError;
use crate::models::{ContactSubmission, RawSubmission};
use crate::utils::sanitization::{sanitize_input, strip_active_content};
use regex::Regex;
use std::sync::LazyLock;

// Simplified RFC 5322 shape
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\s\-']+$").expect("valid name regex"));

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s\-()+]+$").expect("valid phone regex"));

/// Switches for the optional checks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationRules {
    /// Enforce phone format when a phone number is supplied
    pub strict_phone: bool,
}

pub fn is_valid_name(name: &str) -> bool {
    let cleaned = name.trim();
    let length = cleaned.chars().count();

    (MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) && NAME_REGEX.is_match(cleaned)
}

pub fn is_valid_email(email: &str) -> bool {
    let email = sanitize_input(email).to_lowercase();

    if !EMAIL_REGEX.is_match(&email) {
        return false;
    }
    if email.chars().count() > MAX_EMAIL_LENGTH {
        return false;
    }
    let local_part = email.split('@').next().unwrap_or_default();
    if local_part.chars().count() > MAX_EMAIL_LOCAL_PART_LENGTH {
        return false;
    }

    !email.contains("&lt;") && !email.contains("&gt;")
}

/// Empty phone numbers are valid, the field is optional
pub fn is_valid_phone(phone: &str) -> bool {
    let cleaned = sanitize_input(phone);
    if cleaned.is_empty() {
        return true;
    }
    if !PHONE_REGEX.is_match(&cleaned) {
        return false;
    }

    let digits = cleaned.chars().filter(char::is_ascii_digit).count();
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
}

pub fn is_valid_message(message: &str) -> bool {
    let length = sanitize_input(message).chars().count();
    (MIN_MESSAGE_LENGTH..=MAX_MESSAGE_LENGTH).contains(&length)
}

/// Address usable as a Reply-To header.
///
/// Only addresses that need no stripping and carry no angle brackets are
/// passed through; HTML encoding would otherwise change the mailbox.
fn reply_to_address(raw_email: &str) -> Option<String> {
    let trimmed = raw_email.trim();
    let untouched = strip_active_content(trimmed) == trimmed;

    (untouched && !trimmed.contains(['<', '>'])).then(|| trimmed.to_string())
}

/// Sanitizes and validates raw fields in the order name, email, phone, message.
///
/// The first failing field determines the error.
pub fn validate_submission(
    raw: &RawSubmission,
    rules: ValidationRules,
) -> Result<ContactSubmission, ContactError> {
    let name = sanitize_input(&raw.name);
    let email = sanitize_input(&raw.email);
    let phone = sanitize_input(&raw.phone);
    let message = sanitize_input(&raw.message);

    if !is_valid_name(&name) {
        return Err(ContactError::Validation(INVALID_NAME_MESSAGE.to_string()));
    }
    if !is_valid_email(&email) {
        return Err(ContactError::Validation(INVALID_EMAIL_MESSAGE.to_string()));
    }
    if rules.strict_phone && !is_valid_phone(&phone) {
        return Err(ContactError::Validation(INVALID_PHONE_MESSAGE.to_string()));
    }
    if !is_valid_message(&message) {
        return Err(ContactError::Validation(
            INVALID_MESSAGE_MESSAGE.to_string(),
        ));
    }

    Ok(ContactSubmission {
        name,
        email,
        reply_to: reply_to_address(&raw.email),
        phone: (!phone.is_empty()).then_some(phone),
        message,
    })
}
