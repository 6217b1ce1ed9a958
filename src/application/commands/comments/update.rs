use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::{CommentId, CommentText, CommentTypes, CommentUpdate},
        profile::ProfileId,
    },
};

pub struct UpdateCommentCommand {
    pub comment_id: CommentId,
    /// Profile performing the edit; it must exist.
    pub user_id: ProfileId,
    pub text: Option<CommentText>,
    pub types: Option<CommentTypes>,
}

impl CommentCommandService {
    pub async fn update_comment(&self, command: UpdateCommentCommand) -> ApplicationResult<CommentDto> {
        let UpdateCommentCommand {
            comment_id,
            user_id,
            text,
            types,
        } = command;

        self.require_comment(comment_id).await?;
        self.require_user(user_id).await?;

        let mut update = CommentUpdate::new(comment_id, self.clock.now());
        if let Some(text) = text {
            update = update.with_text(text);
        }
        if let Some(types) = types {
            update = update.with_types(types);
        }

        let updated = self
            .comment_repo
            .update(update)
            .await?
            .ok_or_else(|| ApplicationError::bad_request("Comment update failed"))?;

        tracing::info!(comment_id = %updated.id, "comment updated");
        Ok(updated.into())
    }
}
