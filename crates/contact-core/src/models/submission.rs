/// Contact form submission models
use crate::constants::{INVALID_JSON_MESSAGE, NOT_AN_OBJECT_MESSAGE};
use crate::error::ContactError;
use serde_json::{Map, Value};

/// Fields as they arrived in the request body, before sanitization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// A submission that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    /// Sanitized address, safe to embed in the email body
    pub email: String,
    /// Submitter address as typed, when it can be used verbatim in a header
    pub reply_to: Option<String>,
    pub phone: Option<String>,
    pub message: String,
}

impl RawSubmission {
    /// Parses a request body into raw form fields.
    ///
    /// An empty body is treated as `{}`. Missing, `null` and non-string
    /// values all become empty strings and fail validation later.
    pub fn from_body(body: &[u8]) -> Result<Self, ContactError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(body).map_err(|e| {
            tracing::debug!(error = %e, "Request body is not valid JSON");
            ContactError::InvalidRequest(INVALID_JSON_MESSAGE.to_string())
        })?;

        match value {
            Value::Object(fields) => Ok(Self::from_fields(&fields)),
            _ => Err(ContactError::InvalidRequest(
                NOT_AN_OBJECT_MESSAGE.to_string(),
            )),
        }
    }

    fn from_fields(fields: &Map<String, Value>) -> Self {
        let field = |key: &str| {
            fields
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            name: field("name"),
            email: field("email"),
            phone: field("phone"),
            message: field("message"),
        }
    }
}
