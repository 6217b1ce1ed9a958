// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Origin prepended to media paths, without a trailing slash.
    pub public_base_url: String,
}

impl HttpState {
    pub fn default_avatar_url(&self) -> String {
        format!("{}/media/avatar.png", self.public_base_url)
    }
}
