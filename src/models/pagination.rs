//! Pagination of book listings.
//!
//! The requested page comes straight from the query string and is never
//! corrected: values that do not address a real page produce an empty slice
//! instead of an error.

use std::fmt;

/// Number of books shown per page
pub const PAGE_SIZE: i64 = 5;

/// Page number as requested by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestedPage {
    /// Integer page number, possibly zero, negative or past the last page
    Number(i64),
    /// Value that is not an integer, kept verbatim for the view
    Malformed(String),
}

impl RequestedPage {
    /// Parse the raw `page` query parameter. Missing or empty defaults to page 1.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => RequestedPage::Number(1),
            Some(value) => value
                .parse::<i64>()
                .map(RequestedPage::Number)
                .unwrap_or_else(|_| RequestedPage::Malformed(value.to_string())),
        }
    }

    /// Pick the page out of decoded query pairs.
    ///
    /// A repeated `page` parameter cannot name a single page; its values are
    /// joined with commas and kept as a malformed page.
    pub fn from_query_pairs(pairs: &[(String, String)]) -> Self {
        let values: Vec<&str> = pairs
            .iter()
            .filter(|(key, _)| key == "page")
            .map(|(_, value)| value.as_str())
            .collect();

        match values.as_slice() {
            [] => Self::parse(None),
            [value] => Self::parse(Some(value)),
            many => RequestedPage::Malformed(many.join(",")),
        }
    }

    /// Slice bounds `[start, end)` into the ordered result list.
    ///
    /// `None` means the page cannot address any record (zero, negative,
    /// malformed or overflowing), which renders as an empty page.
    pub fn bounds(&self) -> Option<(i64, i64)> {
        match self {
            RequestedPage::Number(page) if *page >= 1 => {
                let start = (page - 1).checked_mul(PAGE_SIZE)?;
                let end = page.checked_mul(PAGE_SIZE)?;
                Some((start, end))
            }
            _ => None,
        }
    }

    /// True when this is the integer page `number`
    pub fn is(&self, number: i64) -> bool {
        matches!(self, RequestedPage::Number(page) if *page == number)
    }
}

impl Default for RequestedPage {
    fn default() -> Self {
        RequestedPage::Number(1)
    }
}

impl fmt::Display for RequestedPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestedPage::Number(page) => write!(f, "{}", page),
            RequestedPage::Malformed(raw) => write!(f, "{}", raw),
        }
    }
}

/// Number of pages needed to show `total` records (0 when there are none)
pub fn page_count(total: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    (total + PAGE_SIZE - 1) / PAGE_SIZE
}

/// One page of results together with the metadata the list view needs
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page_count: i64,
    pub page: RequestedPage,
}
