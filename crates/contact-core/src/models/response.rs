/// Response envelope returned to the contact form
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

impl ContactResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let json = serde_json::to_value(ContactResponse::success("Sent")).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "message": "Sent"}));
    }

    #[test]
    fn test_failure_envelope() {
        let json = serde_json::to_value(ContactResponse::failure("Invalid name")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "message": "Invalid name"})
        );
    }
}
