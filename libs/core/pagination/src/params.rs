use serde::Deserialize;
use utoipa::IntoParams;

/// Largest page a client may request.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Page size used when the client does not ask for one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Highest page number kept as requested. The offset of any page up to this
/// one still fits the signed 64-bit integers databases bind.
pub const MAX_PAGE_NUMBER: u64 = i64::MAX as u64 / MAX_PAGE_SIZE + 1;

/// Page request taken from the query string.
///
/// `page_number` is 1-based. Values outside the accepted ranges are clamped
/// rather than rejected: a page number of `0` becomes `1`, one above
/// [`MAX_PAGE_NUMBER`] becomes [`MAX_PAGE_NUMBER`], a page size of `0`
/// becomes `1` and anything above [`MAX_PAGE_SIZE`] becomes [`MAX_PAGE_SIZE`].
///
/// Both `?pageNumber=2&pageSize=20` and `?page_number=2&page_size=20` are
/// accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, IntoParams)]
#[serde(from = "RawPageParams", rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 1-based page number (default 1)
    page_number: u64,
    /// Items per page, between 1 and 100 (default 10)
    page_size: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPageParams {
    #[serde(default, alias = "page_number", alias = "page")]
    page_number: Option<u64>,
    #[serde(default, alias = "page_size")]
    page_size: Option<u64>,
}

impl From<RawPageParams> for PageParams {
    fn from(raw: RawPageParams) -> Self {
        Self::new(
            raw.page_number.unwrap_or(1),
            raw.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

impl PageParams {
    pub fn new(page_number: u64, page_size: u64) -> Self {
        Self {
            page_number: page_number.clamp(1, MAX_PAGE_NUMBER),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn page_number(&self) -> u64 {
        self.page_number
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// 0-based index of the requested page, as expected by [`crate::PageRange`].
    pub fn page_index(&self) -> u64 {
        self.page_number - 1
    }

    /// Number of items preceding the requested page.
    pub fn offset(&self) -> u64 {
        self.page_index().saturating_mul(self.page_size)
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}
