// src/presentation/http/controllers/system.rs
use crate::presentation::http::error::HttpError;
use axum::http::{Method, Uri};

#[utoipa::path(
    get,
    path = "/api/healthcheck",
    responses((status = 200, description = "Service is up.", body = String, content_type = "text/plain")),
    tag = "System"
)]
pub async fn healthcheck() -> &'static str {
    "Boo API is healthy."
}

#[utoipa::path(
    get,
    path = "/api/",
    responses((status = 200, description = "Greeting.", body = String, content_type = "text/plain")),
    tag = "System"
)]
pub async fn root() -> &'static str {
    "Boo API is Up and Running Techies!"
}

/// Catch-all for unmatched routes.
pub async fn not_found(method: Method, uri: Uri) -> HttpError {
    HttpError::not_found(format!("Route {method} {uri} not found"))
}
