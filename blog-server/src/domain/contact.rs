use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use super::error::DomainError;

pub(crate) const CONTACT_FIELDS: [&str; 3] = ["name", "email", "message"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ContactRequest {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) message: String,
}

impl ContactRequest {
    /// Presence is checked for all fields first so the error names every
    /// missing one, then the email format.
    pub(crate) fn validate(self) -> Result<Self, DomainError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        let missing: Vec<&'static str> = CONTACT_FIELDS
            .into_iter()
            .zip([name, email, message])
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
            .collect();
        if !missing.is_empty() {
            return Err(DomainError::MissingFields(missing));
        }

        if !email.validate_email() {
            return Err(DomainError::Validation {
                field: "email",
                message: "must be a valid email",
            });
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}
