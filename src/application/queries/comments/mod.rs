mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetCommentQuery;
pub use list::ListCommentsQuery;
pub use service::CommentQueryService;
