/// Constants used throughout the contact form system
// Response messages
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent.";
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON in request body";
pub const NOT_AN_OBJECT_MESSAGE: &str = "Request body must be a JSON object";
pub const INVALID_NAME_MESSAGE: &str = "Invalid name";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email";
pub const INVALID_PHONE_MESSAGE: &str = "Invalid phone number";
pub const INVALID_MESSAGE_MESSAGE: &str = "Invalid message (5-5000 characters)";
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send email";
pub const CONFIG_ERROR_MESSAGE: &str = "Configuration error";
pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred processing your request";

// Field limits
pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MIN_MESSAGE_LENGTH: usize = 5;
pub const MAX_MESSAGE_LENGTH: usize = 5000;
pub const MIN_PHONE_DIGITS: usize = 7;
pub const MAX_PHONE_DIGITS: usize = 15; // E.164

// RFC 5321 limits
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_EMAIL_LOCAL_PART_LENGTH: usize = 64;

// Email composition
pub const SUBJECT_PREFIX: &str = "New Contact Form Submission from";
pub const PHONE_NOT_PROVIDED: &str = "Not provided";
pub const EMAIL_CHARSET: &str = "UTF-8";

// Environment variables
pub const ENV_RECIPIENT_EMAIL: &str = "RECIPIENT_EMAIL";
pub const ENV_SENDER_EMAIL: &str = "SENDER_EMAIL";
pub const ENV_STRICT_PHONE_VALIDATION: &str = "STRICT_PHONE_VALIDATION";
