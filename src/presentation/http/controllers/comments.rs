// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{
        CreateCommentCommand, DeleteCommentCommand, LikeCommentCommand, UnlikeCommentCommand,
        UpdateCommentCommand,
    },
    dto::{CommentDto, CommentListDto},
    queries::comments::{GetCommentQuery, ListCommentsQuery},
};
use crate::domain::comment::{CommentId, CommentSort, CommentText, CommentType, CommentTypes};
use crate::domain::profile::ProfileId;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiQuery, parse_id};
use crate::presentation::http::response::{ApiResponse, MessageResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, extract::Path};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateCommentRequest {
    /// Author profile id.
    pub user_id: String,
    /// Profile being commented on.
    pub profile_id: String,
    #[serde(rename = "type")]
    pub types: Vec<CommentType>,
    pub text: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateCommentRequest {
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub types: Option<Vec<CommentType>>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CommentListParams {
    /// Profile whose comments are listed.
    pub profile_id: String,
    /// Viewer; drives `likedByUser`.
    pub user_id: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// `best` or `recent` (default).
    pub sort_by: Option<String>,
    /// Validated but not applied as a filter.
    #[serde(rename = "type")]
    pub comment_type: Option<String>,
}

impl CommentListParams {
    fn into_query(self) -> HttpResult<ListCommentsQuery> {
        if self.page == Some(0) {
            return Err(HttpError::bad_request(
                "page must be greater than or equal to 1",
            ));
        }
        if self.limit == Some(0) {
            return Err(HttpError::bad_request(
                "limit must be greater than or equal to 1",
            ));
        }

        let sort = match self.sort_by.as_deref() {
            Some(raw) => raw.parse::<CommentSort>()?,
            None => CommentSort::default(),
        };
        let comment_type = self
            .comment_type
            .as_deref()
            .map(str::parse::<CommentType>)
            .transpose()?;
        let user_id: Option<ProfileId> = self.user_id.as_deref().map(parse_id).transpose()?;

        Ok(ListCommentsQuery {
            user_id,
            page: self.page,
            limit: self.limit,
            sort,
            comment_type,
            ..ListCommentsQuery::for_profile(parse_id(&self.profile_id)?)
        })
    }
}

fn comment_text(raw: String) -> HttpResult<CommentText> {
    Ok(CommentText::new(raw)?)
}

fn comment_types(raw: Vec<CommentType>) -> HttpResult<CommentTypes> {
    Ok(CommentTypes::new(raw)?)
}

fn comment_and_user(raw: &(String, String)) -> HttpResult<(CommentId, ProfileId)> {
    Ok((parse_id(&raw.0)?, parse_id(&raw.1)?))
}

#[utoipa::path(
    post,
    path = "/api/comment",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created.", body = ApiResponse<CommentDto>),
        (status = 400, description = "Invalid payload or self comment.", body = MessageResponse),
        (status = 404, description = "Author or target profile missing.", body = MessageResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<CreateCommentRequest>,
) -> HttpResult<ApiResponse<CommentDto>> {
    let command = CreateCommentCommand {
        user_id: parse_id(&payload.user_id)?,
        profile_id: parse_id(&payload.profile_id)?,
        types: comment_types(payload.types)?,
        text: comment_text(payload.text)?,
    };

    let comment = state
        .services
        .comment_commands
        .create_comment(command)
        .await
        .into_http()?;

    Ok(ApiResponse::created("Comment created successfully", comment))
}

#[utoipa::path(
    get,
    path = "/api/comment",
    params(CommentListParams),
    responses(
        (status = 200, description = "One page of comments with the profile's tag facet.", body = ApiResponse<CommentListDto>),
        (status = 400, description = "Invalid query.", body = MessageResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<CommentListParams>,
) -> HttpResult<ApiResponse<CommentListDto>> {
    let query = params.into_query()?;

    let listing = state
        .services
        .comment_queries
        .list_comments(query)
        .await
        .into_http()?;

    Ok(ApiResponse::ok("Comments fetched successfully", listing))
}

#[utoipa::path(
    get,
    path = "/api/comment/{comment_id}",
    params(("comment_id" = String, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Comment found.", body = ApiResponse<CommentDto>),
        (status = 404, description = "Unknown comment.", body = MessageResponse)
    ),
    tag = "Comments"
)]
pub async fn get_comment(
    Extension(state): Extension<HttpState>,
    Path(comment_id): Path<String>,
) -> HttpResult<ApiResponse<CommentDto>> {
    let comment_id: CommentId = parse_id(&comment_id)?;

    let comment = state
        .services
        .comment_queries
        .get_comment(GetCommentQuery { comment_id })
        .await
        .into_http()?;

    Ok(ApiResponse::ok("Comment fetched successfully", comment))
}

#[utoipa::path(
    put,
    path = "/api/comment/{comment_id}/{user_id}",
    params(
        ("comment_id" = String, Path, description = "Comment id"),
        ("user_id" = String, Path, description = "Acting profile id")
    ),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Comment updated.", body = ApiResponse<CommentDto>),
        (status = 400, description = "Empty or invalid payload.", body = MessageResponse),
        (status = 404, description = "Unknown comment or acting profile.", body = MessageResponse)
    ),
    tag = "Comments"
)]
pub async fn update_comment(
    Extension(state): Extension<HttpState>,
    Path(ids): Path<(String, String)>,
    ApiJson(payload): ApiJson<UpdateCommentRequest>,
) -> HttpResult<ApiResponse<CommentDto>> {
    let (comment_id, user_id) = comment_and_user(&ids)?;
    if payload.text.is_none() && payload.types.is_none() {
        return Err(HttpError::bad_request("text or type must be supplied"));
    }

    let command = UpdateCommentCommand {
        comment_id,
        user_id,
        text: payload.text.map(comment_text).transpose()?,
        types: payload.types.map(comment_types).transpose()?,
    };

    let comment = state
        .services
        .comment_commands
        .update_comment(command)
        .await
        .into_http()?;

    Ok(ApiResponse::ok("Comment updated successfully", comment))
}

#[utoipa::path(
    delete,
    path = "/api/comment/{comment_id}/{user_id}",
    params(
        ("comment_id" = String, Path, description = "Comment id"),
        ("user_id" = String, Path, description = "Acting profile id")
    ),
    responses(
        (status = 200, description = "Comment deleted.", body = MessageResponse),
        (status = 404, description = "Unknown comment.", body = MessageResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Path(ids): Path<(String, String)>,
) -> HttpResult<ApiResponse<()>> {
    let (comment_id, user_id) = comment_and_user(&ids)?;
    tracing::debug!(%comment_id, %user_id, "deleting comment");

    state
        .services
        .comment_commands
        .delete_comment(DeleteCommentCommand { comment_id })
        .await
        .into_http()?;

    Ok(ApiResponse::message("Comment deleted successfully"))
}

#[utoipa::path(
    post,
    path = "/api/comment/{comment_id}/{user_id}/like",
    params(
        ("comment_id" = String, Path, description = "Comment id"),
        ("user_id" = String, Path, description = "Liking profile id")
    ),
    responses(
        (status = 200, description = "Comment liked.", body = ApiResponse<CommentDto>),
        (status = 400, description = "Already liked.", body = MessageResponse),
        (status = 404, description = "Unknown comment or profile.", body = MessageResponse)
    ),
    tag = "Comments"
)]
pub async fn like_comment(
    Extension(state): Extension<HttpState>,
    Path(ids): Path<(String, String)>,
) -> HttpResult<ApiResponse<CommentDto>> {
    let (comment_id, user_id) = comment_and_user(&ids)?;

    let comment = state
        .services
        .comment_commands
        .like_comment(LikeCommentCommand {
            comment_id,
            user_id,
        })
        .await
        .into_http()?;

    Ok(ApiResponse::ok("Comment liked successfully", comment))
}

#[utoipa::path(
    post,
    path = "/api/comment/{comment_id}/{user_id}/unlike",
    params(
        ("comment_id" = String, Path, description = "Comment id"),
        ("user_id" = String, Path, description = "Profile withdrawing the like")
    ),
    responses(
        (status = 200, description = "Like withdrawn.", body = ApiResponse<CommentDto>),
        (status = 400, description = "Not liked.", body = MessageResponse),
        (status = 404, description = "Unknown comment or profile.", body = MessageResponse)
    ),
    tag = "Comments"
)]
pub async fn unlike_comment(
    Extension(state): Extension<HttpState>,
    Path(ids): Path<(String, String)>,
) -> HttpResult<ApiResponse<CommentDto>> {
    let (comment_id, user_id) = comment_and_user(&ids)?;

    let comment = state
        .services
        .comment_commands
        .unlike_comment(UnlikeCommentCommand {
            comment_id,
            user_id,
        })
        .await
        .into_http()?;

    Ok(ApiResponse::ok("Comment unlike successfully", comment))
}
