// src/application/commands/comments/mod.rs
mod create;
mod delete;
mod like;
mod service;
mod update;

pub use create::CreateCommentCommand;
pub use delete::DeleteCommentCommand;
pub use like::{LikeCommentCommand, UnlikeCommentCommand};
pub use service::CommentCommandService;
pub use update::UpdateCommentCommand;

pub(crate) const COMMENT_NOT_FOUND: &str = "Comment not found";
pub(crate) const USER_NOT_FOUND: &str = "User for comment not found";
