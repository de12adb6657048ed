/// Email composition
pub mod composer;

pub use composer::compose_contact_email;
