use crate::domain::pagination::Paginated;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(
    rename_all = "camelCase",
    bound(
        serialize = "T: Serialize",
        deserialize = "T: serde::de::DeserializeOwned"
    )
)]
pub struct PageDto<T> {
    pub docs: Vec<T>,
    pub total_docs: u64,
    pub limit: u32,
    pub total_pages: u64,
    pub page: u32,
    pub paging_counter: u64,
    pub has_prev_page: bool,
    pub has_next_page: bool,
}

impl<T, U> From<Paginated<U>> for PageDto<T>
where
    U: Into<T>,
{
    fn from(page: Paginated<U>) -> Self {
        Self {
            docs: page.docs.into_iter().map(Into::into).collect(),
            total_docs: page.total_docs,
            limit: page.limit,
            total_pages: page.total_pages,
            page: page.page,
            paging_counter: page.paging_counter,
            has_prev_page: page.has_prev_page,
            has_next_page: page.has_next_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pagination::PageRequest;

    #[test]
    fn serializes_camel_case_envelope() {
        let page: PageDto<String> =
            Paginated::new(vec!["a"], 11, PageRequest::new(Some(2), Some(5))).into();
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["docs"][0], "a");
        assert_eq!(json["totalDocs"], 11);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["pagingCounter"], 6);
        assert_eq!(json["hasPrevPage"], true);
        assert_eq!(json["hasNextPage"], true);
    }
}
