pub mod comments;
pub mod pagination;
pub mod profiles;

pub use comments::{CommentDto, CommentListDto, CommentListItemDto};
pub use pagination::PageDto;
pub use profiles::ProfileDto;
