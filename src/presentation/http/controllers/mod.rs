// src/presentation/http/controllers/mod.rs
pub mod comments;
pub mod profiles;
pub mod system;
