//! Contact endpoint contract tests
//!
//! Exercises POST /api/contact through the full router: validation
//! failures, the missing-SMTP error, the success contract and the response
//! body shapes the site's form relies on.

use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use portfolio::config::{Config, EmailConfig, ObservabilityConfig, ServerConfig};
use portfolio::email::{EmailError, Mailer, OutgoingEmail};
use portfolio::routes::router;
use portfolio::AppState;

fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        email: EmailConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

/// App with no SMTP settings, as a fresh deployment would start.
fn test_app() -> Router {
    router(AppState {
        config: test_config(),
        mailer: None,
    })
}

/// App with a pre-wired transport standing in for SMTP.
fn test_app_with_mailer(mailer: Arc<dyn Mailer>) -> Router {
    router(AppState {
        config: test_config(),
        mailer: Some(mailer),
    })
}

/// Transport double that records what the handler sends.
#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
}

#[async_trait::async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

fn valid_submission() -> Value {
    json!({
        "name": "Jan Kowalski",
        "email": "jan@example.com",
        "phone": "+48 123 456 789",
        "company": "Acme",
        "message": "Interesuje mnie współpraca przy nowym projekcie."
    })
}

async fn post_contact(body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, body)
}

#[tokio::test]
async fn test_valid_submission_with_transport_reports_success() {
    let recorder = Arc::new(RecordingMailer::default());
    let mailer: Arc<dyn Mailer> = recorder.clone();
    let app = test_app_with_mailer(mailer);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(valid_submission().to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body, json!({ "success": true }));

    let sent = recorder.sent.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].to, "tymbeixpoi@gmail.com");
    assert_eq!(sent[0].reply_to.as_deref(), Some("jan@example.com"));
    assert_eq!(sent[1].to, "jan@example.com");
}

#[tokio::test]
async fn test_valid_submission_without_smtp_reports_missing_config() {
    let (status, body) = post_contact(valid_submission().to_string()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "Brakuje SMTP config (SMTP_HOST, SMTP_PORT, SMTP_SECURE, SMTP_USER, SMTP_PASS)."
    );
    assert!(
        body.get("success").is_none(),
        "error responses must not carry a success flag"
    );
}

#[tokio::test]
async fn test_blank_field_is_rejected() {
    let mut submission = valid_submission();
    submission["company"] = json!("");

    let (status, body) = post_contact(submission.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Wszystkie pola są wymagane.");
}

#[tokio::test]
async fn test_whitespace_only_field_is_rejected() {
    let mut submission = valid_submission();
    submission["name"] = json!("   ");

    let (status, body) = post_contact(submission.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Wszystkie pola są wymagane.");
}

#[tokio::test]
async fn test_null_field_is_rejected() {
    let mut submission = valid_submission();
    submission["name"] = json!(null);

    let (status, body) = post_contact(submission.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Wszystkie pola są wymagane.");
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let submission = json!({
        "name": "Jan Kowalski",
        "email": "jan@example.com",
        "company": "Acme",
        "message": "Interesuje mnie współpraca przy nowym projekcie."
    });

    let (status, body) = post_contact(submission.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Wszystkie pola są wymagane.");
}

#[tokio::test]
async fn test_short_message_is_rejected() {
    let mut submission = valid_submission();
    submission["message"] = json!("Za krótko");

    let (status, body) = post_contact(submission.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Wiadomość musi mieć minimum 10 znaków.");
}

#[tokio::test]
async fn test_blank_field_reported_before_short_message() {
    let mut submission = valid_submission();
    submission["email"] = json!("");
    submission["message"] = json!("hej");

    let (status, body) = post_contact(submission.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Wszystkie pola są wymagane.");
}

#[tokio::test]
async fn test_malformed_json_is_a_client_error() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("this is not json"))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert!(
        response.status().is_client_error(),
        "malformed JSON must be the caller's fault, got {}",
        response.status()
    );
}
