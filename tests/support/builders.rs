// tests/support/builders.rs
use boo_api::application::commands::comments::CreateCommentCommand;
use boo_api::application::commands::profiles::CreateProfileCommand;
use boo_api::application::dto::{CommentDto, ProfileDto};
use boo_api::application::services::ApplicationServices;
use boo_api::domain::comment::{CommentId, CommentText, CommentType, CommentTypes};
use boo_api::domain::profile::ProfileId;
use serde_json::{Value, json};

pub fn profile_id(dto: &ProfileDto) -> ProfileId {
    ProfileId::new(dto.id)
}

pub fn comment_id(dto: &CommentDto) -> CommentId {
    CommentId::new(dto.id)
}

pub async fn seed_profile(services: &ApplicationServices, name: &str) -> ProfileDto {
    services
        .profile_commands
        .create_profile(CreateProfileCommand {
            name: name.into(),
            mbti: Some("INFP".into()),
            ..CreateProfileCommand::default()
        })
        .await
        .expect("seed profile")
}

pub struct CommentBuilder {
    user_id: ProfileId,
    profile_id: ProfileId,
    types: Vec<CommentType>,
    text: String,
}

impl CommentBuilder {
    /// Comment by `author` on `target`'s profile.
    pub fn new(author: ProfileId, target: ProfileId) -> Self {
        Self {
            user_id: author,
            profile_id: target,
            types: vec![CommentType::Mbti],
            text: "hi".into(),
        }
    }

    pub fn types(mut self, types: &[CommentType]) -> Self {
        self.types = types.to_vec();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn command(self) -> CreateCommentCommand {
        CreateCommentCommand {
            user_id: self.user_id,
            profile_id: self.profile_id,
            types: CommentTypes::new(self.types).expect("non-empty types"),
            text: CommentText::new(self.text).expect("non-empty text"),
        }
    }

    pub fn json(self) -> Value {
        json!({
            "userId": self.user_id.to_string(),
            "profileId": self.profile_id.to_string(),
            "type": self.types.iter().map(CommentType::as_str).collect::<Vec<_>>(),
            "text": self.text,
        })
    }

    pub async fn seed(self, services: &ApplicationServices) -> CommentDto {
        services
            .comment_commands
            .create_comment(self.command())
            .await
            .expect("seed comment")
    }
}
