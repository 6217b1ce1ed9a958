use crate::domain::comment::{Comment, CommentListing, CommentType, CommentView};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{pagination::PageDto, profiles::ProfileDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user_id: Uuid,
    pub profile_id: Uuid,
    #[serde(rename = "type")]
    pub types: Vec<CommentType>,
    pub text: String,
    pub likes: i64,
    pub likes_by: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            user_id: comment.user_id.into(),
            profile_id: comment.profile_id.into(),
            types: comment.types.as_slice().to_vec(),
            text: comment.text.into_inner(),
            likes: comment.likes,
            likes_by: comment.likes_by.into_iter().map(Into::into).collect(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentListItemDto {
    #[serde(flatten)]
    pub comment: CommentDto,
    pub liked_by_user: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_details: Option<ProfileDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_details: Option<ProfileDto>,
}

impl From<CommentView> for CommentListItemDto {
    fn from(view: CommentView) -> Self {
        Self {
            comment: view.comment.into(),
            liked_by_user: view.liked_by_user,
            user_details: view.user_details.map(Into::into),
            profile_details: view.profile_details.map(Into::into),
        }
    }
}

/// Comment page plus the tag facet for the whole profile.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentListDto {
    #[serde(flatten)]
    pub page: PageDto<CommentListItemDto>,
    pub types: Vec<CommentType>,
}

impl From<CommentListing> for CommentListDto {
    fn from(listing: CommentListing) -> Self {
        Self {
            page: listing.page.into(),
            types: listing.types,
        }
    }
}
