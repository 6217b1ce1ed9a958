// src/domain/mod.rs
pub mod comment;
pub mod errors;
pub mod pagination;
pub mod profile;
