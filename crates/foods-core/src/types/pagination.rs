//! Page selection over an already-fetched result sequence.

use crate::error::AppError;
use crate::result::AppResult;

/// Records per page.
pub const PAGE_SIZE: usize = 12;
/// Highest accepted page number.
pub const MAX_PAGE: u32 = 10;

/// A validated 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSelection {
    page: u32,
}

impl PageSelection {
    /// Validate a page number. Out-of-range values are an error, never clamped.
    pub fn new(page: u32) -> AppResult<Self> {
        if !(1..=MAX_PAGE).contains(&page) {
            return Err(wrong_page());
        }
        Ok(Self { page })
    }

    /// Parse the raw `page` query parameter. Absent or empty means page 1.
    pub fn parse(raw: Option<&str>) -> AppResult<Self> {
        match raw.map(str::trim) {
            None | Some("") => Self::new(1),
            Some(s) => s.parse::<u32>().map_err(|_| wrong_page()).and_then(Self::new),
        }
    }

    /// The 1-based page number.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Index of the first record on this page.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * PAGE_SIZE
    }

    /// Keep only `[offset, offset + PAGE_SIZE)`. May be short or empty.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset())
            .take(PAGE_SIZE)
            .collect()
    }
}

impl Default for PageSelection {
    fn default() -> Self {
        Self { page: 1 }
    }
}

fn wrong_page() -> AppError {
    AppError::validation("Wrong page number", "Page <1 or >10")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_first_page() {
        assert_eq!(PageSelection::parse(None).unwrap().page(), 1);
        assert_eq!(PageSelection::parse(Some("")).unwrap().page(), 1);
        assert_eq!(PageSelection::parse(Some(" 3 ")).unwrap().page(), 3);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        for raw in ["0", "11", "-1", "abc", "1.5"] {
            let err = PageSelection::parse(Some(raw)).unwrap_err();
            assert_eq!(err.status_code(), 400, "page {raw}");
            assert_eq!(err.message, "Wrong page number");
        }
        assert!(PageSelection::new(10).is_ok());
    }

    #[test]
    fn test_slice_short_result_set() {
        let items = vec![1, 2, 3];
        assert_eq!(PageSelection::new(1).unwrap().slice(items.clone()), vec![1, 2, 3]);
        assert!(PageSelection::new(2).unwrap().slice(items).is_empty());
    }

    #[test]
    fn test_slice_second_page_window() {
        let items: Vec<usize> = (0..30).collect();
        let page = PageSelection::new(2).unwrap();
        assert_eq!(page.offset(), 12);
        assert_eq!(page.slice(items.clone()), (12..24).collect::<Vec<_>>());
        assert_eq!(PageSelection::new(3).unwrap().slice(items), (24..30).collect::<Vec<_>>());
    }
}
