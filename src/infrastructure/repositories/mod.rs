// src/infrastructure/repositories/mod.rs
mod error;
mod memory;
mod postgres_comment;
mod postgres_profile;

pub use error::map_sqlx;
pub use memory::{InMemoryCommentRepository, InMemoryProfileRepository, MemoryStore};
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_profile::PostgresProfileRepository;
