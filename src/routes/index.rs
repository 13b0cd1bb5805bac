use axum::response::{Html, IntoResponse};

/// GET / - the portfolio page, embedded at build time and served verbatim.
pub async fn page() -> impl IntoResponse {
    Html(include_str!("../../static/index.html"))
}
