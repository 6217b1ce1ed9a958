use super::{PROFILE_NOT_FOUND, ProfileCommandService};
use crate::{
    application::{
        dto::ProfileDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::profile::{ProfileId, ProfileName, ProfileUpdate},
};

#[derive(Debug)]
pub struct UpdateProfileCommand {
    pub id: ProfileId,
    pub name: Option<String>,
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

impl UpdateProfileCommand {
    pub const fn new(id: ProfileId) -> Self {
        Self {
            id,
            name: None,
            description: None,
            mbti: None,
            enneagram: None,
            variant: None,
            tritype: None,
            socionics: None,
            sloan: None,
            psyche: None,
            image: None,
        }
    }
}

impl ProfileCommandService {
    pub async fn update_profile(&self, command: UpdateProfileCommand) -> ApplicationResult<ProfileDto> {
        let id = command.id;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found(PROFILE_NOT_FOUND));
        }

        let mut update = ProfileUpdate::new(id, self.clock.now());
        update.name = command.name.map(ProfileName::new).transpose()?;
        update.description = command.description;
        update.mbti = command.mbti;
        update.enneagram = command.enneagram;
        update.variant = command.variant;
        update.tritype = command.tritype;
        update.socionics = command.socionics;
        update.sloan = command.sloan;
        update.psyche = command.psyche;
        update.image = command.image;

        if update.is_empty() {
            return Err(ApplicationError::validation(
                "at least one profile field must be supplied",
            ));
        }

        let updated = self
            .repo
            .update(update)
            .await?
            .ok_or_else(|| ApplicationError::bad_request("Profile update failed"))?;

        tracing::info!(profile_id = %updated.id, "profile updated");
        Ok(updated.into())
    }
}
