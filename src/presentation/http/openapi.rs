// src/presentation/http/openapi.rs
use crate::application::dto::{CommentDto, CommentListDto, CommentListItemDto, ProfileDto};
use crate::domain::comment::CommentType;
use crate::presentation::http::controllers::{comments, profiles, system};
use crate::presentation::http::response::{EnvelopeStatus, MessageResponse};
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_PATH: &str = "/api/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        profiles::create_profile,
        profiles::list_profiles,
        profiles::get_profile,
        profiles::update_profile,
        profiles::delete_profile,
        comments::create_comment,
        comments::list_comments,
        comments::get_comment,
        comments::update_comment,
        comments::delete_comment,
        comments::like_comment,
        comments::unlike_comment,
        system::healthcheck,
        system::root
    ),
    components(
        schemas(
            EnvelopeStatus,
            MessageResponse,
            ProfileDto,
            CommentDto,
            CommentListItemDto,
            CommentListDto,
            CommentType,
            profiles::CreateProfileRequest,
            profiles::UpdateProfileRequest,
            comments::CreateCommentRequest,
            comments::UpdateCommentRequest
        )
    ),
    tags(
        (name = "Profiles", description = "Profile management"),
        (name = "Comments", description = "Comments, likes and ranked listings"),
        (name = "System", description = "Health and greeting endpoints")
    ),
    info(
        title = "Boo API",
        description = "Profiles with typed, likeable comments",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/api/docs`, backed by the document at [`OPENAPI_PATH`].
pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/api/docs").url(OPENAPI_PATH, ApiDoc::openapi()))
}
