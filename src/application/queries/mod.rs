pub mod comments;
pub mod profiles;
