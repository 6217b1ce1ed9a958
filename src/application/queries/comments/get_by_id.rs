use super::CommentQueryService;
use crate::{
    application::{
        commands::comments::COMMENT_NOT_FOUND,
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::CommentId,
};

pub struct GetCommentQuery {
    pub comment_id: CommentId,
}

impl CommentQueryService {
    pub async fn get_comment(&self, query: GetCommentQuery) -> ApplicationResult<CommentDto> {
        let comment = self
            .comment_repo
            .find_by_id(query.comment_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(COMMENT_NOT_FOUND))?;
        Ok(comment.into())
    }
}
