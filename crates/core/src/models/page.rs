//! Offset pagination envelope.

use serde::{Deserialize, Serialize};

/// Number of items per page when the caller doesn't ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// One page of a listing endpoint's results.
///
/// Pages are 1-based. `total_items` counts every match across all pages,
/// not just this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Whether another page follows this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether this page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_has_next() {
        let mid = Page::<u32> {
            items: vec![1, 2],
            page: 1,
            page_size: 2,
            total_items: 5,
            total_pages: 3,
        };
        assert!(mid.has_next());

        let last = Page::<u32> {
            items: vec![5],
            page: 3,
            page_size: 2,
            total_items: 5,
            total_pages: 3,
        };
        assert!(!last.has_next());
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let json = r#"{"items":[],"page":1,"pageSize":20,"totalItems":0,"totalPages":0}"#;
        let page: Page<u32> = serde_json::from_str(json).unwrap();
        assert!(page.is_empty());
        assert!(!page.has_next());
        assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
    }
}
