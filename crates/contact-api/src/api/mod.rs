/// API endpoint handlers
pub mod contact;
