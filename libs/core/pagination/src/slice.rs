use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use crate::PageParams;

/// Response header carrying the JSON-encoded [`PaginationMetadata`].
pub const PAGINATION_HEADER: &str = "X-Pagination";

/// One page of a larger ordered collection.
///
/// Built once per request from an already materialized slice and never
/// mutated afterwards; asking for another page means building another
/// `PagedSlice`.
///
/// Serializes as the bare JSON array of its items. The counters travel
/// separately, see [`PagedSlice::metadata`].
#[derive(Debug, Clone, PartialEq)]
pub struct PagedSlice<T> {
    items: Vec<T>,
    total_count: u64,
    page_number: u64,
    page_size: u64,
    total_pages: u64,
    has_previous: bool,
    has_next: bool,
}

impl<T> PagedSlice<T> {
    /// Wrap the items of one page.
    ///
    /// `total_count` is the size of the *unsliced* source and `page_number` is
    /// 1-based. `page_size` must be non-zero; [`PageParams`] already guarantees
    /// that for request-driven callers.
    pub fn new(items: Vec<T>, total_count: u64, page_number: u64, page_size: u64) -> Self {
        let total_pages = (total_count as f64 / page_size as f64).ceil() as u64;

        Self {
            items,
            total_count,
            page_number,
            page_size,
            total_pages,
            has_previous: page_number > 1,
            // Matches the historical `pageNumber < totalPages - 1` rule, which
            // reports no next page while standing on the second-to-last one.
            has_next: page_number.saturating_add(1) < total_pages,
        }
    }

    /// Slice a full in-memory sequence using 1-based page numbers.
    pub fn paginate<I>(source: I, params: &PageParams) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let source: Vec<T> = source.into_iter().collect();
        let total_count = source.len() as u64;
        let skip = usize::try_from(params.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(params.page_size()).unwrap_or(usize::MAX);

        let items = source.into_iter().skip(skip).take(take).collect();

        Self::new(items, total_count, params.page_number(), params.page_size())
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn page_number(&self) -> u64 {
        self.page_number
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.has_previous
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// Convert the items while keeping every counter.
    pub fn map<U, F>(self, f: F) -> PagedSlice<U>
    where
        F: FnMut(T) -> U,
    {
        PagedSlice {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_number: self.page_number,
            page_size: self.page_size,
            total_pages: self.total_pages,
            has_previous: self.has_previous,
            has_next: self.has_next,
        }
    }

    pub fn metadata(&self) -> PaginationMetadata {
        PaginationMetadata {
            total_count: self.total_count,
            page_size: self.page_size,
            current_page: self.page_number,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

impl<T: Serialize> Serialize for PagedSlice<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.items.serialize(serializer)
    }
}

/// Counters of a [`PagedSlice`], sent as JSON in the [`PAGINATION_HEADER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    pub total_count: u64,
    pub page_size: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PaginationMetadata {
    /// JSON text suitable for the [`PAGINATION_HEADER`] value.
    pub fn to_header_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let page = PagedSlice::new(vec![1, 2, 3], 55, 1, 20);
        assert_eq!(page.total_pages(), 3);

        let page = PagedSlice::new(Vec::<u8>::new(), 60, 1, 20);
        assert_eq!(page.total_pages(), 3);

        let page = PagedSlice::new(Vec::<u8>::new(), 61, 1, 20);
        assert_eq!(page.total_pages(), 4);
    }

    #[test]
    fn test_total_pages_matches_ceiling_for_many_inputs() {
        for page_size in 1..=25u64 {
            for total_count in 0..=120u64 {
                let page = PagedSlice::new(Vec::<u8>::new(), total_count, 1, page_size);
                let expected = total_count.div_ceil(page_size);
                assert_eq!(
                    page.total_pages(),
                    expected,
                    "total_count={total_count} page_size={page_size}"
                );
            }
        }
    }

    #[test]
    fn test_empty_source_has_no_pages() {
        let page = PagedSlice::paginate(Vec::<u8>::new(), &PageParams::default());
        assert_eq!(page.total_count(), 0);
        assert_eq!(page.total_pages(), 0);
        assert!(page.items().is_empty());
        assert!(!page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn test_second_page_of_fifty_five() {
        let page = PagedSlice::paginate(1..=55, &PageParams::new(2, 20));

        assert_eq!(page.items(), (21..=40).collect::<Vec<_>>().as_slice());
        assert_eq!(page.total_count(), 55);
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_previous());
        // A third page exists, yet the `page < total_pages - 1` rule says no.
        assert!(!page.has_next());
    }

    #[test]
    fn test_has_next_on_first_of_three_pages() {
        let page = PagedSlice::paginate(1..=55, &PageParams::new(1, 20));
        assert!(!page.has_previous());
        assert!(page.has_next());
    }

    #[test]
    fn test_last_partial_page() {
        let page = PagedSlice::paginate(1..=55, &PageParams::new(3, 20));
        assert_eq!(page.items(), (41..=55).collect::<Vec<_>>().as_slice());
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let page = PagedSlice::paginate(1..=5, &PageParams::new(9, 10));
        assert!(page.items().is_empty());
        assert_eq!(page.total_count(), 5);
        assert_eq!(page.page_number(), 9);
    }

    #[test]
    fn test_items_never_exceed_page_size() {
        for page_size in 1..=12u64 {
            for page_number in 1..=8u64 {
                let params = PageParams::new(page_number, page_size);
                let page = PagedSlice::paginate(0..40, &params);
                assert!(page.items().len() as u64 <= page_size);
            }
        }
    }

    #[test]
    fn test_serializes_as_item_array() {
        let page = PagedSlice::new(vec!["kibble", "leash"], 12, 2, 2);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json, serde_json::json!(["kibble", "leash"]));
    }

    #[test]
    fn test_metadata_header_json() {
        let page = PagedSlice::new(vec![1, 2], 55, 2, 20);
        let json = page.metadata().to_header_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "totalCount": 55,
                "pageSize": 20,
                "currentPage": 2,
                "totalPages": 3,
                "hasNext": false,
                "hasPrevious": true
            })
        );
    }

    #[test]
    fn test_map_keeps_counters() {
        let page = PagedSlice::new(vec![1, 2], 30, 2, 2);
        let mapped = page.clone().map(|n| n * 10);

        assert_eq!(mapped.items(), &[10, 20]);
        assert_eq!(mapped.metadata(), page.metadata());
    }
}
