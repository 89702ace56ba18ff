use axum::{extract::State, http::StatusCode, Json};

use crate::dto::submit_dto::{SubmitRequest, SubmitResponse};
use crate::{error::Result, AppState};

/// `POST /api/submit` — validate, persist one row, then fire both
/// notification emails concurrently. Email failures are logged and swallowed:
/// once the row is stored the request has succeeded, so notification outcome
/// must never change the response.
#[axum::debug_handler]
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRequest>,
) -> Result<(StatusCode, Json<SubmitResponse>)> {
    let new_submission = payload.into_new_submission()?;
    let submission = state
        .submission_service
        .create_submission(new_submission)
        .await?;

    tracing::info!(
        submission_id = %submission.id,
        challenge = submission.challenge.as_str(),
        "submission stored"
    );

    let (confirmation, notification) = tokio::join!(
        state.email_service.send_confirmation(&submission),
        state.email_service.send_assessor_notification(&submission),
    );
    if let Err(err) = confirmation {
        tracing::error!(
            submission_id = %submission.id,
            error = %err,
            "failed to send confirmation email"
        );
    }
    if let Err(err) = notification {
        tracing::error!(
            submission_id = %submission.id,
            error = %err,
            "failed to send assessor notification"
        );
    }

    let body = SubmitResponse {
        success: true,
        message: "Submission received successfully".to_string(),
        submission_id: submission.id,
    };
    Ok((StatusCode::OK, Json(body)))
}
