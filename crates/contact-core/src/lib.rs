/// Contact Core - shared library for the contact form Lambda
///
/// This crate contains the submission model, input sanitization and
/// validation, email composition, and the delivery capability backed by SES.
pub mod constants;
pub mod email;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::ContactError;
pub use models::{ContactEmail, ContactResponse, ContactSubmission};
pub use services::{ContactConfig, ContactService, EmailSender};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
