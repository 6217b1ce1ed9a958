use super::CommentCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::comment::CommentId,
};

pub struct DeleteCommentCommand {
    pub comment_id: CommentId,
}

impl CommentCommandService {
    pub async fn delete_comment(&self, command: DeleteCommentCommand) -> ApplicationResult<()> {
        let id = command.comment_id;
        self.require_comment(id).await?;

        if !self.comment_repo.delete(id).await? {
            return Err(ApplicationError::bad_request("Comment deletion failed"));
        }

        tracing::info!(comment_id = %id, "comment deleted");
        Ok(())
    }
}
