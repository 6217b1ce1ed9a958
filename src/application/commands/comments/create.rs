// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        comment::{CommentText, CommentTypes, NewComment},
        profile::ProfileId,
    },
};

pub struct CreateCommentCommand {
    pub user_id: ProfileId,
    pub profile_id: ProfileId,
    pub types: CommentTypes,
    pub text: CommentText,
}

impl CommentCommandService {
    pub async fn create_comment(&self, command: CreateCommentCommand) -> ApplicationResult<CommentDto> {
        let CreateCommentCommand {
            user_id,
            profile_id,
            types,
            text,
        } = command;

        if user_id == profile_id {
            return Err(ApplicationError::bad_request(
                "You cannot self comment on your profile",
            ));
        }

        self.require_profile(profile_id, "Profile for comment not found")
            .await?;
        self.require_user(user_id).await?;

        let now = self.clock.now();
        let created = self
            .comment_repo
            .insert(NewComment {
                user_id,
                profile_id,
                types,
                text,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(
            comment_id = %created.id,
            user_id = %created.user_id,
            profile_id = %created.profile_id,
            "comment created"
        );
        Ok(created.into())
    }
}
