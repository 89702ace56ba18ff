use crate::error::{Error, Result};
use crate::models::submission::Submission;
use crate::utils::html::escape;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;

const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Transactional email client backed by the Resend HTTP API. Sends are
/// attempt-once; callers decide whether a failure matters.
#[derive(Clone)]
pub struct EmailService {
    client: Client,
    api_key: String,
    from: String,
    assessor_recipients: Vec<String>,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    html: &'a str,
}

impl EmailService {
    pub fn new(
        client: Client,
        api_key: String,
        from: String,
        assessor_recipients: Vec<String>,
    ) -> Self {
        Self {
            client,
            api_key,
            from,
            assessor_recipients,
        }
    }

    pub async fn send_confirmation(&self, submission: &Submission) -> Result<()> {
        let (subject, html) = confirmation_email(submission);
        let to = [submission.email.clone()];
        self.send(&to, &subject, &html).await
    }

    pub async fn send_assessor_notification(&self, submission: &Submission) -> Result<()> {
        let (subject, html) = assessor_notification_email(submission, Utc::now());
        self.send(&self.assessor_recipients, &subject, &html).await
    }

    async fn send(&self, to: &[String], subject: &str, html: &str) -> Result<()> {
        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(&self.api_key)
            .json(&SendEmailRequest {
                from: &self.from,
                to,
                subject,
                html,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Email(format!(
                "email API returned {}: {}",
                status, body
            )));
        }
        Ok(())
    }
}

const ASSESSMENT_CRITERIA: &str = "\
            <ul>\n\
              <li><strong>Technical Execution (40%)</strong></li>\n\
              <li><strong>Creative Problem-Solving (30%)</strong></li>\n\
              <li><strong>Code Quality &amp; Best Practices (20%)</strong></li>\n\
              <li><strong>Attention to Detail &amp; Polish (10%)</strong></li>\n\
            </ul>";

/// Confirmation email for the candidate: subject plus HTML body.
pub fn confirmation_email(submission: &Submission) -> (String, String) {
    let label = submission.challenge.label();
    let subject = format!("Assessment Submission Confirmed - {}", label);
    let html = format!(
        r#"<!DOCTYPE html>
<html>
  <body>
    <div class="container">
      <div class="header">
        <h1>Assessment Submission Received</h1>
      </div>
      <div class="content">
        <p>Hi {name},</p>
        <p>Thank you for completing the <strong>{label}</strong>! We've successfully received your submission.</p>
        <div class="info-box">
          <h2>Submission Details</h2>
          <p><strong>Challenge:</strong> {label}</p>
          <p><strong>Time Spent:</strong> {time_spent}</p>
          <p><strong>Project Link:</strong> <a href="{url}">{url}</a></p>
        </div>
        <h2>What's Next?</h2>
        <p>Our assessment team will review your work based on the following criteria:</p>
{criteria}
        <p>You can expect to hear back from us within <strong>3-5 business days</strong>.</p>
        <p>Best regards,<br>The Assessment Team</p>
      </div>
      <div class="footer">
        <p>This is an automated confirmation email. Please do not reply directly to this message.</p>
      </div>
    </div>
  </body>
</html>"#,
        name = escape(&submission.name),
        label = label,
        time_spent = escape(&submission.time_spent),
        url = escape(&submission.submission_url),
        criteria = ASSESSMENT_CRITERIA,
    );
    (subject, html)
}

/// Notification email for the assessor list. Carries the full free-text
/// description and a human-readable send timestamp, which the candidate copy
/// does not.
pub fn assessor_notification_email(
    submission: &Submission,
    sent_at: DateTime<Utc>,
) -> (String, String) {
    let label = submission.challenge.label();
    let subject = format!("New Submission: {} - {}", submission.name, label);
    let html = format!(
        r#"<!DOCTYPE html>
<html>
  <body>
    <div class="container">
      <div class="header">
        <h1>New Assessment Submission</h1>
      </div>
      <div class="content">
        <p>A new assessment has been submitted for review.</p>
        <div class="info-box">
          <h2>Candidate Information</h2>
          <p><strong>Name:</strong> {name}</p>
          <p><strong>Email:</strong> <a href="mailto:{email}">{email}</a></p>
          <p><strong>Challenge:</strong> {label}</p>
          <p><strong>Time Spent:</strong> {time_spent}</p>
        </div>
        <div class="info-box">
          <h2>Submission Details</h2>
          <p><strong>Project Link:</strong><br>
          <a href="{url}">View Submission</a></p>
        </div>
        <div class="description-box">
          <h2>Candidate's Approach</h2>
          <p>{description}</p>
        </div>
        <h2>Assessment Criteria</h2>
{criteria}
        <p><small>Submitted at: {sent_at}</small></p>
      </div>
    </div>
  </body>
</html>"#,
        name = escape(&submission.name),
        email = escape(&submission.email),
        label = label,
        time_spent = escape(&submission.time_spent),
        url = escape(&submission.submission_url),
        description = escape(&submission.description),
        criteria = ASSESSMENT_CRITERIA,
        sent_at = sent_at.format("%B %d, %Y %H:%M UTC"),
    );
    (subject, html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::submission::Challenge;
    use uuid::Uuid;

    fn submission() -> Submission {
        Submission {
            id: Uuid::new_v4(),
            name: "John Smith".into(),
            email: "john.smith@example.com".into(),
            challenge: Challenge::Development,
            submission_url: "https://github.com/johnsmith/test-project".into(),
            description: "Built a dashboard.".into(),
            time_spent: "3 hours".into(),
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn confirmation_subject_carries_challenge_label() {
        let (subject, html) = confirmation_email(&submission());
        assert_eq!(
            subject,
            "Assessment Submission Confirmed - Development Challenge"
        );
        assert!(html.contains("Hi John Smith,"));
        assert!(html.contains("https://github.com/johnsmith/test-project"));
        assert!(html.contains("3 hours"));
        // The candidate copy never includes the free-text description.
        assert!(!html.contains("Built a dashboard."));
    }

    #[test]
    fn assessor_copy_carries_description_and_timestamp() {
        let sent_at = "2026-08-28T10:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let (subject, html) = assessor_notification_email(&submission(), sent_at);
        assert_eq!(subject, "New Submission: John Smith - Development Challenge");
        assert!(html.contains("Built a dashboard."));
        assert!(html.contains("mailto:john.smith@example.com"));
        assert!(html.contains("August 28, 2026 10:30 UTC"));
    }

    #[test]
    fn description_is_html_escaped() {
        let mut submission = submission();
        submission.description = "<b>bold</b> & \"quoted\"".into();
        let (_, html) = assessor_notification_email(&submission, Utc::now());
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt; &amp; &quot;quoted&quot;"));
        assert!(!html.contains("<b>bold</b>"));
    }
}
