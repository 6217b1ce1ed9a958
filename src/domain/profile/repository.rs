use crate::domain::errors::DomainResult;
use crate::domain::pagination::{PageRequest, Paginated};
use crate::domain::profile::entity::{NewProfile, Profile, ProfileUpdate};
use crate::domain::profile::value_objects::ProfileId;
use async_trait::async_trait;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn insert(&self, profile: NewProfile) -> DomainResult<Profile>;
    async fn find_by_id(&self, id: ProfileId) -> DomainResult<Option<Profile>>;
    /// Returns `None` when no profile with `update.id` exists.
    async fn update(&self, update: ProfileUpdate) -> DomainResult<Option<Profile>>;
    /// Returns whether a profile was actually removed. Comments that reference
    /// the profile are left in place.
    async fn delete(&self, id: ProfileId) -> DomainResult<bool>;
    async fn list_page(&self, request: PageRequest) -> DomainResult<Paginated<Profile>>;
}
