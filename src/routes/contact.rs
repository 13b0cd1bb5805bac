use axum::{extract::State, Json};
use portfolio_contact::{
    acknowledgement_email, notification_email, ContactSubmission, OWNER_EMAIL,
};
use serde_json::{json, Value};

use crate::{
    email::{EmailError, Mailer, OutgoingEmail, SmtpMailer},
    error::ApiError,
    routes::AppState,
};

/// POST /api/contact
///
/// Validates the submission, then relays it by email. Unless state carries
/// a pre-wired transport, the handle is built fresh for every request and
/// only if the SMTP settings are complete, so a misconfigured deployment
/// fails before anything is sent.
pub async fn action(
    State(app_state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> Result<Json<Value>, ApiError> {
    submission.validate()?;

    match &app_state.mailer {
        Some(mailer) => relay_submission(mailer.as_ref(), &submission).await?,
        None => {
            let Some(settings) = app_state.config.email.smtp() else {
                return Err(ApiError::SmtpNotConfigured);
            };
            let mailer = SmtpMailer::new(&settings)?;
            relay_submission(&mailer, &submission).await?;
        }
    }

    tracing::info!(email = %submission.email, "contact form relayed");
    Ok(Json(json!({ "success": true })))
}

/// Sends the two emails for one validated submission: the owner
/// notification first, with the submitter as reply-to, then the
/// acknowledgement back to the submitter. A failed first send aborts the
/// relay, so the submitter is never acknowledged for a message the owner
/// did not get.
pub async fn relay_submission(
    mailer: &dyn Mailer,
    submission: &ContactSubmission,
) -> Result<(), EmailError> {
    let notification = notification_email(submission);
    mailer
        .send(&OutgoingEmail {
            to: OWNER_EMAIL.to_string(),
            reply_to: Some(submission.email.clone()),
            subject: notification.subject,
            html_body: notification.html_body,
        })
        .await?;

    let acknowledgement = acknowledgement_email(submission);
    mailer
        .send(&OutgoingEmail {
            to: submission.email.clone(),
            reply_to: None,
            subject: acknowledgement.subject,
            html_body: acknowledgement.html_body,
        })
        .await?;

    Ok(())
}
