// tests/support/mocks/repos.rs
use async_trait::async_trait;
use boo_api::domain::comment::{
    Comment, CommentId, CommentListQuery, CommentListing, CommentRepository, CommentUpdate,
    NewComment,
};
use boo_api::domain::errors::{DomainError, DomainResult};
use boo_api::domain::profile::ProfileId;
use chrono::{DateTime, Utc};

fn down<T>() -> DomainResult<T> {
    Err(DomainError::persistence("connection refused"))
}

/// Every call fails the way an unreachable database does.
pub struct FailingCommentRepo;

#[async_trait]
impl CommentRepository for FailingCommentRepo {
    async fn insert(&self, _comment: NewComment) -> DomainResult<Comment> {
        down()
    }

    async fn update(&self, _update: CommentUpdate) -> DomainResult<Option<Comment>> {
        down()
    }

    async fn find_by_id(&self, _id: CommentId) -> DomainResult<Option<Comment>> {
        down()
    }

    async fn delete(&self, _id: CommentId) -> DomainResult<bool> {
        down()
    }

    async fn is_liked(&self, _id: CommentId, _user_id: ProfileId) -> DomainResult<bool> {
        down()
    }

    async fn like(
        &self,
        _id: CommentId,
        _user_id: ProfileId,
        _at: DateTime<Utc>,
    ) -> DomainResult<Option<Comment>> {
        down()
    }

    async fn unlike(
        &self,
        _id: CommentId,
        _user_id: ProfileId,
        _at: DateTime<Utc>,
    ) -> DomainResult<Option<Comment>> {
        down()
    }

    async fn list_for_profile(&self, _query: &CommentListQuery) -> DomainResult<CommentListing> {
        down()
    }
}
