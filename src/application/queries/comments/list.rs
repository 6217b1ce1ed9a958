use super::CommentQueryService;
use crate::{
    application::{dto::CommentListDto, error::ApplicationResult},
    domain::{
        comment::{CommentListQuery, CommentSort, CommentType},
        pagination::PageRequest,
        profile::ProfileId,
    },
};

pub struct ListCommentsQuery {
    pub profile_id: ProfileId,
    /// Viewer used to compute `likedByUser`.
    pub user_id: Option<ProfileId>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort: CommentSort,
    pub comment_type: Option<CommentType>,
}

impl ListCommentsQuery {
    pub const fn for_profile(profile_id: ProfileId) -> Self {
        Self {
            profile_id,
            user_id: None,
            page: None,
            limit: None,
            sort: CommentSort::Recent,
            comment_type: None,
        }
    }
}

impl CommentQueryService {
    /// Repository failures propagate unchanged; there is no soft-failure path.
    pub async fn list_comments(&self, query: ListCommentsQuery) -> ApplicationResult<CommentListDto> {
        let listing_query = CommentListQuery {
            profile_id: query.profile_id,
            viewer: query.user_id,
            page: PageRequest::new(query.page, query.limit),
            sort: query.sort,
            comment_type: query.comment_type,
        };

        let listing = self.comment_repo.list_for_profile(&listing_query).await?;
        tracing::debug!(
            profile_id = %listing_query.profile_id,
            sort = listing_query.sort.as_str(),
            page = listing.page.page,
            returned = listing.page.docs.len(),
            total = listing.page.total_docs,
            "comments listed"
        );
        Ok(listing.into())
    }
}
