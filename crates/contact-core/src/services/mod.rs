/// Delivery, configuration and request services
pub mod config;
pub mod contact;
pub mod ses;

pub use config::ContactConfig;
pub use contact::ContactService;
pub use ses::{EmailSender, SesEmailSender};

#[cfg(any(test, feature = "mock"))]
pub use ses::MockEmailSender;
