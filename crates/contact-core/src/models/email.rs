/// Outbound email handed to the delivery client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail {
    /// Verified sender identity
    pub from: String,
    pub to: Vec<String>,
    /// Submitter address, so the recipient can answer directly
    pub reply_to: Option<String>,
    pub subject: String,
    /// Plain text body
    pub body: String,
}
