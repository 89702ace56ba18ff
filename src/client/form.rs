use crate::client::api::{ApiClient, SubmitPayload};
use crate::models::submission::Challenge;

/// Hard cap applied to the description as it is entered; the only
/// field-level limit on the form.
pub const DESCRIPTION_MAX_CHARS: usize = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Success,
    Error,
}

/// Form state for one submission attempt. The challenge is carried in from
/// the prior selection step and is not editable here. Success is terminal:
/// the only way back is `cancel` (or dropping the form) and starting over.
#[derive(Debug, Clone)]
pub struct IntakeForm {
    challenge: Challenge,
    name: String,
    email: String,
    submission_url: String,
    description: String,
    time_spent: String,
    status: SubmitStatus,
    is_submitting: bool,
    error_message: Option<String>,
}

impl IntakeForm {
    pub fn new(challenge: Challenge) -> Self {
        Self {
            challenge,
            name: String::new(),
            email: String::new(),
            submission_url: String::new(),
            description: String::new(),
            time_spent: String::new(),
            status: SubmitStatus::Idle,
            is_submitting: false,
            error_message: None,
        }
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_submission_url(&mut self, value: impl Into<String>) {
        self.submission_url = value.into();
    }

    /// Truncated at the cap as entered; no other field blocks typing.
    pub fn set_description(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.description = value.chars().take(DESCRIPTION_MAX_CHARS).collect();
    }

    pub fn set_time_spent(&mut self, value: impl Into<String>) {
        self.time_spent = value.into();
    }

    pub fn challenge(&self) -> Challenge {
        self.challenge
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Discards everything entered and hands the challenge selection back to
    /// the caller. Nothing is persisted.
    pub fn cancel(self) -> Challenge {
        self.challenge
    }

    /// Sends the form as one request. Transport failure, a non-2xx response,
    /// and a malformed response body all fold into `Error` with a best-effort
    /// message; nothing is retried.
    pub async fn submit(&mut self, api: &ApiClient) -> SubmitStatus {
        if self.is_submitting {
            return self.status;
        }
        self.is_submitting = true;
        self.status = SubmitStatus::Idle;
        self.error_message = None;

        let payload = SubmitPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            challenge: self.challenge,
            submission_url: self.submission_url.clone(),
            description: self.description.clone(),
            time_spent: self.time_spent.clone(),
        };

        match api.submit(&payload).await {
            Ok(_) => {
                self.status = SubmitStatus::Success;
            }
            Err(err) => {
                self.status = SubmitStatus::Error;
                self.error_message = Some(err.user_message());
            }
        }

        self.is_submitting = false;
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_and_empty() {
        let form = IntakeForm::new(Challenge::Design);
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert!(!form.is_submitting());
        assert!(form.error_message().is_none());
        assert_eq!(form.description(), "");
    }

    #[test]
    fn description_is_truncated_as_entered() {
        let mut form = IntakeForm::new(Challenge::Development);
        form.set_description("x".repeat(350));
        assert_eq!(form.description().chars().count(), DESCRIPTION_MAX_CHARS);

        form.set_description("short");
        assert_eq!(form.description(), "short");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let mut form = IntakeForm::new(Challenge::Ai);
        form.set_description("é".repeat(350));
        assert_eq!(form.description().chars().count(), DESCRIPTION_MAX_CHARS);
    }

    #[test]
    fn cancel_returns_the_selected_challenge() {
        let mut form = IntakeForm::new(Challenge::Ai);
        form.set_name("John Smith");
        form.set_email("john.smith@example.com");
        assert_eq!(form.cancel(), Challenge::Ai);
    }
}
