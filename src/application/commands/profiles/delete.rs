use super::{PROFILE_NOT_FOUND, ProfileCommandService};
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::profile::ProfileId,
};

pub struct DeleteProfileCommand {
    pub id: ProfileId,
}

impl ProfileCommandService {
    /// Comments written by or about the profile are kept; listings render
    /// them without the missing profile details.
    pub async fn delete_profile(&self, command: DeleteProfileCommand) -> ApplicationResult<()> {
        let id = command.id;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found(PROFILE_NOT_FOUND));
        }

        if !self.repo.delete(id).await? {
            return Err(ApplicationError::bad_request("Profile deletion failed"));
        }

        tracing::info!(profile_id = %id, "profile deleted");
        Ok(())
    }
}
