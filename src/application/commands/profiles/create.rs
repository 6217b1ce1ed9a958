use super::ProfileCommandService;
use crate::{
    application::{dto::ProfileDto, error::ApplicationResult},
    domain::profile::{NewProfile, ProfileName},
};

#[derive(Debug, Default)]
pub struct CreateProfileCommand {
    pub name: String,
    pub description: Option<String>,
    pub mbti: Option<String>,
    pub enneagram: Option<String>,
    pub variant: Option<String>,
    pub tritype: Option<i64>,
    pub socionics: Option<String>,
    pub sloan: Option<String>,
    pub psyche: Option<String>,
    pub image: Option<String>,
}

impl ProfileCommandService {
    pub async fn create_profile(&self, command: CreateProfileCommand) -> ApplicationResult<ProfileDto> {
        let name = ProfileName::new(command.name)?;
        let mut profile = NewProfile::new(name, self.clock.now());
        profile.description = command.description.unwrap_or_default();
        profile.mbti = command.mbti;
        profile.enneagram = command.enneagram.unwrap_or_default();
        profile.variant = command.variant.unwrap_or_default();
        profile.tritype = command.tritype;
        profile.socionics = command.socionics.unwrap_or_default();
        profile.sloan = command.sloan.unwrap_or_default();
        profile.psyche = command.psyche.unwrap_or_default();
        profile.image = command.image.unwrap_or_default();

        let created = self.repo.insert(profile).await?;
        tracing::info!(profile_id = %created.id, name = %created.name, "profile created");
        Ok(created.into())
    }
}
