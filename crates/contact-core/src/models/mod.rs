/// Data models for the contact form system
pub mod email;
pub mod response;
pub mod submission;

pub use email::ContactEmail;
pub use response::ContactResponse;
pub use submission::{ContactSubmission, RawSubmission};
