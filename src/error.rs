use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use portfolio_contact::ValidationError;
use serde_json::json;
use thiserror::Error;

use crate::email::EmailError;

/// Failures of the contact endpoint. The display text of each variant is
/// exactly what the response body carries, so the site's form can show it
/// to the visitor as-is.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Deployment misconfiguration: no transport can be built because one
    /// or more SMTP settings are missing.
    #[error("Brakuje SMTP config (SMTP_HOST, SMTP_PORT, SMTP_SECURE, SMTP_USER, SMTP_PASS).")]
    SmtpNotConfigured,

    /// A send failed. The underlying cause is logged, never returned to
    /// the caller.
    #[error("Nie udało się wysłać wiadomości.")]
    SendFailed(#[from] EmailError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::SmtpNotConfigured | ApiError::SendFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::SendFailed(ref source) = self {
            tracing::error!(error = %source, "contact form send error");
        }

        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
