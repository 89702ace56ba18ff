use crate::models::submission::Challenge;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPayload {
    pub name: String,
    pub email: String,
    pub challenge: Challenge,
    pub submission_url: String,
    pub description: String,
    pub time_spent: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAck {
    pub success: bool,
    pub message: Option<String>,
    pub submission_id: Uuid,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The server rejected the submission; carries its `error` text.
    #[error("{0}")]
    Rejected(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response from server")]
    InvalidResponse,
}

impl SubmitError {
    /// Message to show in the form's error panel: the server's own text when
    /// there is one, a generic fallback for everything else.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Rejected(message) => message.clone(),
            _ => "An error occurred during submission".to_string(),
        }
    }
}

/// Thin client for the intake endpoint. Attempt-once; the form decides what
/// to do with the outcome.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub async fn submit(&self, payload: &SubmitPayload) -> Result<SubmitAck, SubmitError> {
        let response = self
            .http
            .post(format!("{}/api/submit", self.base_url))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|_| SubmitError::InvalidResponse)?;

        if !status.is_success() {
            let message = body["error"].as_str().unwrap_or("Submission failed");
            return Err(SubmitError::Rejected(message.to_string()));
        }
        serde_json::from_value(body).map_err(|_| SubmitError::InvalidResponse)
    }
}
