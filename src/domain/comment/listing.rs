// src/domain/comment/listing.rs
use crate::domain::comment::entity::Comment;
use crate::domain::comment::value_objects::{CommentSort, CommentType};
use crate::domain::pagination::{PageRequest, Paginated};
use crate::domain::profile::{Profile, ProfileId};

#[derive(Debug, Clone)]
pub struct CommentListQuery {
    pub profile_id: ProfileId,
    /// Profile whose likes are reported through `liked_by_user`.
    pub viewer: Option<ProfileId>,
    pub page: PageRequest,
    pub sort: CommentSort,
    /// Accepted from clients but not used as a match condition; listings are
    /// scoped by `profile_id` only.
    pub comment_type: Option<CommentType>,
}

impl CommentListQuery {
    pub fn for_profile(profile_id: ProfileId) -> Self {
        Self {
            profile_id,
            viewer: None,
            page: PageRequest::default(),
            sort: CommentSort::default(),
            comment_type: None,
        }
    }
}

/// A listed comment with its author and target profiles joined in. Either
/// profile may be gone (profiles are deleted without cascading).
#[derive(Debug, Clone)]
pub struct CommentView {
    pub comment: Comment,
    pub liked_by_user: bool,
    pub user_details: Option<Profile>,
    pub profile_details: Option<Profile>,
}

#[derive(Debug, Clone)]
pub struct CommentListing {
    /// Distinct tags across every comment on the profile, independent of the page.
    pub types: Vec<CommentType>,
    pub page: Paginated<CommentView>,
}
