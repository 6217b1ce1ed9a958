use super::ProfileQueryService;
use crate::{
    application::{
        commands::profiles::PROFILE_NOT_FOUND,
        dto::ProfileDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::profile::ProfileId,
};

pub struct GetProfileQuery {
    pub id: ProfileId,
}

impl ProfileQueryService {
    pub async fn get_profile(&self, query: GetProfileQuery) -> ApplicationResult<ProfileDto> {
        let profile = self
            .repo
            .find_by_id(query.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(PROFILE_NOT_FOUND))?;
        Ok(profile.into())
    }
}
