use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Minimum length of the message body, counted in characters after trimming.
pub const MIN_MESSAGE_LEN: usize = 10;

/// One contact-form payload as submitted by a site visitor.
///
/// Built from a single request body, validated once, consumed to render two
/// outbound emails, then discarded. Missing and `null` JSON fields both
/// deserialize to empty strings so that an absent, null or blank field fails
/// validation the same way.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactSubmission {
    #[serde(default, deserialize_with = "empty_if_null")]
    pub name: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub email: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub phone: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub company: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub message: String,
}

fn empty_if_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// At least one field is missing or blank after trimming.
    #[error("Wszystkie pola są wymagane.")]
    FieldsRequired,
    /// The message falls short of [`MIN_MESSAGE_LEN`] after trimming.
    #[error("Wiadomość musi mieć minimum 10 znaków.")]
    MessageTooShort,
}

impl ContactSubmission {
    /// Checks that every field is non-blank after trimming, then that the
    /// message meets the minimum length. The blank check covers all five
    /// fields first, so a short message in an otherwise empty form still
    /// reports the missing fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            &self.name,
            &self.email,
            &self.phone,
            &self.company,
            &self.message,
        ];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(ValidationError::FieldsRequired);
        }
        if self.message.trim().chars().count() < MIN_MESSAGE_LEN {
            return Err(ValidationError::MessageTooShort);
        }
        Ok(())
    }
}
