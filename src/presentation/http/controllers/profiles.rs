// src/presentation/http/controllers/profiles.rs
use crate::application::{
    commands::profiles::{CreateProfileCommand, DeleteProfileCommand, UpdateProfileCommand},
    dto::{PageDto, ProfileDto},
    queries::profiles::{GetProfileQuery, ListProfilesQuery},
};
use crate::domain::profile::ProfileId;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiQuery, parse_id};
use crate::presentation::http::response::ApiResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, extract::Path};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

const MIN_PROFILE_PAGE_SIZE: u32 = 10;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateProfileRequest {
    pub name: String,
    pub description: Option<String>,
    pub mbti: Option<String>,
    pub enneagram: Option<String>,
    pub variant: Option<String>,
    pub tritype: Option<i64>,
    pub socionics: Option<String>,
    pub sloan: Option<String>,
    pub psyche: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub mbti: Option<String>,
    pub enneagram: Option<String>,
    pub variant: Option<String>,
    pub tritype: Option<i64>,
    pub socionics: Option<String>,
    pub sloan: Option<String>,
    pub psyche: Option<String>,
    pub image: Option<String>,
}

impl UpdateProfileRequest {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.mbti.is_none()
            && self.enneagram.is_none()
            && self.variant.is_none()
            && self.tritype.is_none()
            && self.socionics.is_none()
            && self.sloan.is_none()
            && self.psyche.is_none()
            && self.image.is_none()
    }
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProfileListParams {
    /// 1-based page number.
    pub page: Option<u32>,
    /// Page size, at least 10.
    pub limit: Option<u32>,
}

impl ProfileListParams {
    fn validate(&self) -> HttpResult<()> {
        if self.page == Some(0) {
            return Err(HttpError::bad_request(
                "page must be greater than or equal to 1",
            ));
        }
        if self.limit.is_some_and(|limit| limit < MIN_PROFILE_PAGE_SIZE) {
            return Err(HttpError::bad_request(format!(
                "limit must be greater than or equal to {MIN_PROFILE_PAGE_SIZE}"
            )));
        }
        Ok(())
    }
}

#[utoipa::path(
    post,
    path = "/api/profile",
    request_body = CreateProfileRequest,
    responses(
        (status = 201, description = "Profile created.", body = ApiResponse<ProfileDto>),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::response::MessageResponse)
    ),
    tag = "Profiles"
)]
pub async fn create_profile(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<CreateProfileRequest>,
) -> HttpResult<ApiResponse<ProfileDto>> {
    let image = payload
        .image
        .filter(|image| !image.is_empty())
        .unwrap_or_else(|| state.default_avatar_url());

    let command = CreateProfileCommand {
        name: payload.name,
        description: payload.description,
        mbti: payload.mbti,
        enneagram: payload.enneagram,
        variant: payload.variant,
        tritype: payload.tritype,
        socionics: payload.socionics,
        sloan: payload.sloan,
        psyche: payload.psyche,
        image: Some(image),
    };

    let profile = state
        .services
        .profile_commands
        .create_profile(command)
        .await
        .into_http()?;

    Ok(ApiResponse::created("Profile created successfully", profile))
}

#[utoipa::path(
    get,
    path = "/api/profile",
    params(ProfileListParams),
    responses(
        (status = 200, description = "One page of profiles, oldest first.", body = ApiResponse<PageDto<ProfileDto>>),
        (status = 400, description = "Invalid paging parameters.", body = crate::presentation::http::response::MessageResponse)
    ),
    tag = "Profiles"
)]
pub async fn list_profiles(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<ProfileListParams>,
) -> HttpResult<ApiResponse<PageDto<ProfileDto>>> {
    params.validate()?;

    let page = state
        .services
        .profile_queries
        .list_profiles(ListProfilesQuery {
            page: params.page,
            limit: params.limit,
        })
        .await
        .into_http()?;

    Ok(ApiResponse::ok("Profiles fetched successfully", page))
}

#[utoipa::path(
    get,
    path = "/api/profile/{id}",
    params(("id" = String, Path, description = "Profile id")),
    responses(
        (status = 200, description = "Profile found.", body = ApiResponse<ProfileDto>),
        (status = 404, description = "Unknown profile.", body = crate::presentation::http::response::MessageResponse)
    ),
    tag = "Profiles"
)]
pub async fn get_profile(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<ApiResponse<ProfileDto>> {
    let id: ProfileId = parse_id(&id)?;

    let profile = state
        .services
        .profile_queries
        .get_profile(GetProfileQuery { id })
        .await
        .into_http()?;

    Ok(ApiResponse::ok("Profile fetched successfully", profile))
}

#[utoipa::path(
    put,
    path = "/api/profile/{id}",
    params(("id" = String, Path, description = "Profile id")),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated.", body = ApiResponse<ProfileDto>),
        (status = 400, description = "Empty or invalid payload.", body = crate::presentation::http::response::MessageResponse),
        (status = 404, description = "Unknown profile.", body = crate::presentation::http::response::MessageResponse)
    ),
    tag = "Profiles"
)]
pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateProfileRequest>,
) -> HttpResult<ApiResponse<ProfileDto>> {
    let id: ProfileId = parse_id(&id)?;
    if payload.is_empty() {
        return Err(HttpError::bad_request(
            "at least one profile field must be supplied",
        ));
    }

    let command = UpdateProfileCommand {
        name: payload.name,
        description: payload.description,
        mbti: payload.mbti,
        enneagram: payload.enneagram,
        variant: payload.variant,
        tritype: payload.tritype,
        socionics: payload.socionics,
        sloan: payload.sloan,
        psyche: payload.psyche,
        image: payload.image,
        ..UpdateProfileCommand::new(id)
    };

    let profile = state
        .services
        .profile_commands
        .update_profile(command)
        .await
        .into_http()?;

    Ok(ApiResponse::ok("Profile updated successfully", profile))
}

#[utoipa::path(
    delete,
    path = "/api/profile/{id}",
    params(("id" = String, Path, description = "Profile id")),
    responses(
        (status = 200, description = "Profile deleted; its comments are kept.", body = crate::presentation::http::response::MessageResponse),
        (status = 404, description = "Unknown profile.", body = crate::presentation::http::response::MessageResponse)
    ),
    tag = "Profiles"
)]
pub async fn delete_profile(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<ApiResponse<()>> {
    let id: ProfileId = parse_id(&id)?;

    state
        .services
        .profile_commands
        .delete_profile(DeleteProfileCommand { id })
        .await
        .into_http()?;

    Ok(ApiResponse::message("Profile deleted successfully"))
}
