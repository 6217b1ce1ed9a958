// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{comments::CommentCommandService, profiles::ProfileCommandService},
        ports::time::Clock,
        queries::{comments::CommentQueryService, profiles::ProfileQueryService},
    },
    domain::{comment::CommentRepository, profile::ProfileRepository},
};

pub struct ApplicationServices {
    pub profile_commands: Arc<ProfileCommandService>,
    pub profile_queries: Arc<ProfileQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
}

impl ApplicationServices {
    pub fn new(
        profile_repo: Arc<dyn ProfileRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let profile_commands = Arc::new(ProfileCommandService::new(
            Arc::clone(&profile_repo),
            Arc::clone(&clock),
        ));
        let profile_queries = Arc::new(ProfileQueryService::new(Arc::clone(&profile_repo)));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&profile_repo),
            Arc::clone(&clock),
        ));
        let comment_queries = Arc::new(CommentQueryService::new(Arc::clone(&comment_repo)));

        Self {
            profile_commands,
            profile_queries,
            comment_commands,
            comment_queries,
        }
    }
}
