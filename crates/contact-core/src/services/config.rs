/// Configuration loaded from environment variables
use crate::constants::{ENV_RECIPIENT_EMAIL, ENV_SENDER_EMAIL, ENV_STRICT_PHONE_VALIDATION};
use crate::error::ContactError;
use crate::utils::validation::{ValidationRules, is_valid_email};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    /// Where submissions are delivered
    pub recipient_email: String,
    /// Verified SES identity used as the envelope sender
    pub sender_email: String,
    pub validation: ValidationRules,
}

impl ContactConfig {
    pub fn from_env() -> Result<Self, ContactError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ContactError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let recipient_email = get(ENV_RECIPIENT_EMAIL).ok_or_else(|| {
            ContactError::Config(format!(
                "{} environment variable is required but not set",
                ENV_RECIPIENT_EMAIL
            ))
        })?;
        let sender_email = get(ENV_SENDER_EMAIL).unwrap_or_else(|| recipient_email.clone());

        for (key, address) in [
            (ENV_RECIPIENT_EMAIL, &recipient_email),
            (ENV_SENDER_EMAIL, &sender_email),
        ] {
            if !is_valid_email(address) {
                return Err(ContactError::Config(format!(
                    "{} is not a valid email address",
                    key
                )));
            }
        }

        let strict_phone = get(ENV_STRICT_PHONE_VALIDATION)
            .map(|value| parse_flag(&value))
            .transpose()?
            .unwrap_or(false);

        let config = Self {
            recipient_email,
            sender_email,
            validation: ValidationRules { strict_phone },
        };

        tracing::info!(
            strict_phone = config.validation.strict_phone,
            "Configuration validated successfully"
        );

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Result<bool, ContactError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ContactError::Config(format!(
            "{} must be a boolean, got '{}'",
            ENV_STRICT_PHONE_VALIDATION, other
        ))),
    }
}
