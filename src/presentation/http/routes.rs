// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{comments, profiles, system};
use crate::presentation::http::openapi;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/api", get(system::root))
        .route("/api/", get(system::root))
        .route("/api/healthcheck", get(system::healthcheck))
        .route(
            "/api/profile",
            get(profiles::list_profiles).post(profiles::create_profile),
        )
        .route(
            "/api/profile/{id}",
            get(profiles::get_profile)
                .put(profiles::update_profile)
                .delete(profiles::delete_profile),
        )
        .route(
            "/api/comment",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route("/api/comment/{comment_id}", get(comments::get_comment))
        .route(
            "/api/comment/{comment_id}/{user_id}",
            put(comments::update_comment).delete(comments::delete_comment),
        )
        .route(
            "/api/comment/{comment_id}/{user_id}/like",
            post(comments::like_comment),
        )
        .route(
            "/api/comment/{comment_id}/{user_id}/unlike",
            post(comments::unlike_comment),
        )
        .fallback(system::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if allowed_origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
