use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The three fixed assessment tracks a candidate can submit against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum Challenge {
    Design,
    Development,
    Ai,
}

impl Challenge {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "design" => Some(Challenge::Design),
            "development" => Some(Challenge::Development),
            "ai" => Some(Challenge::Ai),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Challenge::Design => "design",
            Challenge::Development => "development",
            Challenge::Ai => "ai",
        }
    }

    /// Human-readable label used in email subjects and bodies.
    pub fn label(&self) -> &'static str {
        match self {
            Challenge::Design => "Design Challenge",
            Challenge::Development => "Development Challenge",
            Challenge::Ai => "AI Integration Challenge",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Submission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub challenge: Challenge,
    pub submission_url: String,
    pub description: String,
    pub time_spent: String,
    pub submitted_at: DateTime<Utc>,
}

/// A validated submission that has not been persisted yet. `id` is assigned
/// by the database on insert.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub challenge: Challenge,
    pub submission_url: String,
    pub description: String,
    pub time_spent: String,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn challenge_ids_round_trip() {
        for challenge in [Challenge::Design, Challenge::Development, Challenge::Ai] {
            assert_eq!(Challenge::from_id(challenge.as_str()), Some(challenge));
        }
        assert_eq!(Challenge::from_id("marketing"), None);
        assert_eq!(Challenge::from_id(""), None);
    }

    #[test]
    fn challenge_labels() {
        assert_eq!(Challenge::Design.label(), "Design Challenge");
        assert_eq!(Challenge::Development.label(), "Development Challenge");
        assert_eq!(Challenge::Ai.label(), "AI Integration Challenge");
    }

    #[test]
    fn challenge_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Challenge::Development).unwrap(),
            "\"development\""
        );
    }
}
