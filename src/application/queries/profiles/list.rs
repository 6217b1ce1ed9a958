use super::ProfileQueryService;
use crate::{
    application::{
        dto::{PageDto, ProfileDto},
        error::ApplicationResult,
    },
    domain::pagination::PageRequest,
};

#[derive(Debug, Default)]
pub struct ListProfilesQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ProfileQueryService {
    pub async fn list_profiles(&self, query: ListProfilesQuery) -> ApplicationResult<PageDto<ProfileDto>> {
        let request = PageRequest::new(query.page, query.limit);
        let page = self.repo.list_page(request).await?;
        Ok(page.into())
    }
}
