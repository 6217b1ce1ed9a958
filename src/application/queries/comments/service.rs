use std::sync::Arc;

use crate::domain::comment::CommentRepository;

pub struct CommentQueryService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
}

impl CommentQueryService {
    pub fn new(comment_repo: Arc<dyn CommentRepository>) -> Self {
        Self { comment_repo }
    }
}
