use crate::domain::comment::entity::{Comment, CommentUpdate, NewComment};
use crate::domain::comment::listing::{CommentListQuery, CommentListing};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::profile::ProfileId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    /// Merges the supplied fields. `None` when the comment does not exist.
    async fn update(&self, update: CommentUpdate) -> DomainResult<Option<Comment>>;
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    async fn delete(&self, id: CommentId) -> DomainResult<bool>;
    async fn is_liked(&self, id: CommentId, user_id: ProfileId) -> DomainResult<bool>;
    /// Atomically records a like stamped `at`. `None` when the comment is
    /// missing or the user is already among its likers.
    async fn like(
        &self,
        id: CommentId,
        user_id: ProfileId,
        at: DateTime<Utc>,
    ) -> DomainResult<Option<Comment>>;
    /// Atomically withdraws a like stamped `at`. `None` when the comment is
    /// missing or the user is not among its likers.
    async fn unlike(
        &self,
        id: CommentId,
        user_id: ProfileId,
        at: DateTime<Utc>,
    ) -> DomainResult<Option<Comment>>;
    async fn list_for_profile(&self, query: &CommentListQuery) -> DomainResult<CommentListing>;
}
