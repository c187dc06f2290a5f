//! # Pagination
//!
//! Primitives shared by every list endpoint of the pet shop API.
//!
//! - **[`PageParams`]**: the page request parsed from the query string
//!   (`pageNumber`, `pageSize`), 1-based and capped at [`MAX_PAGE_SIZE`].
//! - **[`PagedSlice`]**: one page of items plus counting metadata.
//! - **[`PaginationMetadata`]**: the JSON document sent in the
//!   [`PAGINATION_HEADER`] response header.
//! - **[`PageRange`]**: offset/limit applied to a lazy query source before it
//!   is materialized. Its page index is **0-based**.
//!
//! Two page-number conventions coexist on purpose: [`PagedSlice::paginate`]
//! and [`PageParams`] are 1-based, [`PageRange`] is 0-based. Call sites convert
//! explicitly with [`PageParams::page_index`].
//!
//! ```rust
//! use pagination::{PageParams, PagedSlice};
//!
//! let params = PageParams::new(2, 20);
//! let page = PagedSlice::paginate(0..55, &params);
//!
//! assert_eq!(page.items().len(), 20);
//! assert_eq!(page.total_pages(), 3);
//! assert!(page.has_previous());
//! ```

mod params;
mod range;
mod slice;

pub use params::{DEFAULT_PAGE_SIZE, MAX_PAGE_NUMBER, MAX_PAGE_SIZE, PageParams};
pub use range::PageRange;
pub use slice::{PAGINATION_HEADER, PagedSlice, PaginationMetadata};
