/// Utility modules
pub mod logging;
pub mod sanitization;
pub mod validation;

pub use sanitization::sanitize_input;
pub use validation::{ValidationRules, validate_submission};
