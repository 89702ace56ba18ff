use crate::error::{Error, Result};
use crate::models::submission::{Challenge, NewSubmission};
use crate::utils::validation::{is_valid_email, is_valid_url};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hard cap on the free-text description. The form truncates as the
/// candidate types; the server truncates again rather than trusting the
/// client.
pub const DESCRIPTION_MAX_CHARS: usize = 300;

/// Raw request body for `POST /api/submit`. Every field is optional at the
/// deserialization boundary so that missing and empty fields both map to the
/// same validation failure instead of a serde rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub challenge: Option<String>,
    #[serde(default)]
    pub submission_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub time_spent: Option<String>,
}

impl SubmitRequest {
    /// Validates the payload and stamps `submitted_at`. Checks run in a fixed
    /// order and the first failure wins: presence, email shape, URL shape,
    /// challenge id.
    pub fn into_new_submission(self) -> Result<NewSubmission> {
        let name = required(self.name)?;
        let email = required(self.email)?;
        let challenge = required(self.challenge)?;
        let submission_url = required(self.submission_url)?;
        let description = required(self.description)?;
        let time_spent = required(self.time_spent)?;

        if !is_valid_email(&email) {
            return Err(Error::Validation("Invalid email format"));
        }
        if !is_valid_url(&submission_url) {
            return Err(Error::Validation("Invalid URL format"));
        }
        let challenge = Challenge::from_id(&challenge)
            .ok_or(Error::Validation("Invalid challenge"))?;

        Ok(NewSubmission {
            name,
            email,
            challenge,
            submission_url,
            description: truncate_chars(&description, DESCRIPTION_MAX_CHARS),
            time_spent,
            submitted_at: Utc::now(),
        })
    }
}

fn required(field: Option<String>) -> Result<String> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::Validation("All fields are required")),
    }
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub submission_id: Uuid,
}
