// src/application/commands/comments/like.rs
//
// A (comment, user) pair is either liked or not liked. Both transitions
// first require the comment and then the acting profile to exist; only then
// is membership checked. The repository update is itself conditional, so a
// concurrent request that slips past the membership check cannot push the
// same user twice; it gets the "failed" outcome instead.
use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{comment::CommentId, profile::ProfileId},
};

pub struct LikeCommentCommand {
    pub comment_id: CommentId,
    pub user_id: ProfileId,
}

pub struct UnlikeCommentCommand {
    pub comment_id: CommentId,
    pub user_id: ProfileId,
}

impl CommentCommandService {
    pub async fn like_comment(&self, command: LikeCommentCommand) -> ApplicationResult<CommentDto> {
        let LikeCommentCommand {
            comment_id,
            user_id,
        } = command;

        self.require_comment(comment_id).await?;
        self.require_user(user_id).await?;

        if self.comment_repo.is_liked(comment_id, user_id).await? {
            return Err(ApplicationError::bad_request("Comment already liked"));
        }

        let liked = self
            .comment_repo
            .like(comment_id, user_id, self.clock.now())
            .await?
            .ok_or_else(|| {
                tracing::warn!(%comment_id, %user_id, "conditional like matched nothing");
                ApplicationError::bad_request("Comment like failed")
            })?;

        tracing::info!(%comment_id, %user_id, likes = liked.likes, "comment liked");
        Ok(liked.into())
    }

    pub async fn unlike_comment(
        &self,
        command: UnlikeCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let UnlikeCommentCommand {
            comment_id,
            user_id,
        } = command;

        self.require_comment(comment_id).await?;
        self.require_user(user_id).await?;

        if !self.comment_repo.is_liked(comment_id, user_id).await? {
            return Err(ApplicationError::bad_request("Comment not liked"));
        }

        let unliked = self
            .comment_repo
            .unlike(comment_id, user_id, self.clock.now())
            .await?
            .ok_or_else(|| {
                tracing::warn!(%comment_id, %user_id, "conditional unlike matched nothing");
                ApplicationError::bad_request("Comment unlike failed")
            })?;

        tracing::info!(%comment_id, %user_id, likes = unliked.likes, "comment unliked");
        Ok(unliked.into())
    }
}
