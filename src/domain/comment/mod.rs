pub mod entity;
pub mod listing;
pub mod repository;
pub mod value_objects;

pub use entity::{Comment, CommentUpdate, NewComment};
pub use listing::{CommentListQuery, CommentListing, CommentView};
pub use repository::CommentRepository;
pub use value_objects::{CommentId, CommentSort, CommentText, CommentType, CommentTypes};
