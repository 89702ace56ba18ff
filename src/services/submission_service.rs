use crate::error::Result;
use crate::models::submission::{NewSubmission, Submission};
use sqlx::PgPool;

#[derive(Clone)]
pub struct SubmissionService {
    pool: PgPool,
}

impl SubmissionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts one submission and returns the stored row. `id` is assigned by
    /// the database; everything else comes in already validated. Submissions
    /// are immutable, so this is the only write path.
    pub async fn create_submission(&self, new: NewSubmission) -> Result<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (name, email, challenge, submission_url, description, time_spent, submitted_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, email, challenge, submission_url, description, time_spent, submitted_at
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(new.challenge)
        .bind(&new.submission_url)
        .bind(&new.description)
        .bind(&new.time_spent)
        .bind(new.submitted_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(submission)
    }
}
