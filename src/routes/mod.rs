use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::email::Mailer;

mod assets;
mod contact;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// Pre-wired mail transport. When absent, the contact handler builds a
    /// fresh SMTP transport from `config` for each request.
    pub mailer: Option<Arc<dyn Mailer>>,
}

async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404 Not Found")
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/api/contact", post(contact::action))
        .route("/static/{*path}", get(assets::serve))
        .fallback(fallback)
        .with_state(app_state)
}
