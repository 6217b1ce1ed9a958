// src/domain/pagination.rs
//! Offset pagination shared by the profile and comment listings.
//!
//! The envelope mirrors the page/limit contract clients already consume:
//! `totalPages = ceil(totalDocs / limit)`, `pagingCounter` is the 1-based
//! index of the first slot on the requested page (even when that page is
//! empty), and the `has*Page` flags are derived from the request alone.
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Missing or zero values fall back to the defaults.
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        let page = page.filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE);
        let limit = limit.filter(|l| *l >= 1).unwrap_or(DEFAULT_LIMIT);
        Self { page, limit }
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn limit(&self) -> u32 {
        self.limit
    }

    pub const fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[derive(Debug, Clone)]
pub struct Paginated<T> {
    pub docs: Vec<T>,
    pub total_docs: u64,
    pub limit: u32,
    pub total_pages: u64,
    pub page: u32,
    pub paging_counter: u64,
    pub has_prev_page: bool,
    pub has_next_page: bool,
}

impl<T> Paginated<T> {
    pub fn new(docs: Vec<T>, total_docs: u64, request: PageRequest) -> Self {
        let limit = u64::from(request.limit());
        let page = u64::from(request.page());
        Self {
            docs,
            total_docs,
            limit: request.limit(),
            total_pages: total_docs.div_ceil(limit),
            page: request.page(),
            paging_counter: request.offset() + 1,
            has_prev_page: page > 1,
            has_next_page: page * limit < total_docs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_for_missing_or_zero_values() {
        assert_eq!(PageRequest::new(None, None), PageRequest::new(Some(1), Some(10)));
        assert_eq!(PageRequest::new(Some(0), Some(0)), PageRequest::default());
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(PageRequest::new(Some(1), Some(10)).offset(), 0);
        assert_eq!(PageRequest::new(Some(3), Some(4)).offset(), 8);
    }

    #[test]
    fn envelope_for_single_page() {
        let page = Paginated::new(vec![1], 1, PageRequest::default());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.paging_counter, 1);
        assert!(!page.has_prev_page);
        assert!(!page.has_next_page);
    }

    #[test]
    fn envelope_for_middle_page() {
        let page = Paginated::new(vec![4, 5, 6], 10, PageRequest::new(Some(2), Some(3)));
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.paging_counter, 4);
        assert!(page.has_prev_page);
        assert!(page.has_next_page);
    }

    #[test]
    fn page_past_the_end_keeps_counter_and_has_no_next() {
        let page: Paginated<u8> = Paginated::new(vec![], 5, PageRequest::new(Some(4), Some(2)));
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.paging_counter, 7);
        assert!(page.has_prev_page);
        assert!(!page.has_next_page);
    }

    #[test]
    fn empty_listing_has_zero_pages() {
        let page: Paginated<u8> = Paginated::new(vec![], 0, PageRequest::default());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.paging_counter, 1);
        assert!(!page.has_next_page);
    }

    #[test]
    fn exact_multiple_has_no_next_on_last_page() {
        let page = Paginated::new(vec![3, 4], 4, PageRequest::new(Some(2), Some(2)));
        assert_eq!(page.total_pages, 2);
        assert!(!page.has_next_page);
    }
}
