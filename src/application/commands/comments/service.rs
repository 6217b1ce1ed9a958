// src/application/commands/comments/service.rs
use std::sync::Arc;

use super::{COMMENT_NOT_FOUND, USER_NOT_FOUND};
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        comment::{Comment, CommentId, CommentRepository},
        profile::{ProfileId, ProfileRepository},
    },
};

pub struct CommentCommandService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) profile_repo: Arc<dyn ProfileRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            comment_repo,
            profile_repo,
            clock,
        }
    }

    pub(super) async fn require_comment(&self, id: CommentId) -> ApplicationResult<Comment> {
        self.comment_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(COMMENT_NOT_FOUND))
    }

    pub(super) async fn require_profile(
        &self,
        id: ProfileId,
        missing: &'static str,
    ) -> ApplicationResult<()> {
        match self.profile_repo.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(ApplicationError::not_found(missing)),
        }
    }

    pub(super) async fn require_user(&self, id: ProfileId) -> ApplicationResult<()> {
        self.require_profile(id, USER_NOT_FOUND).await
    }
}
