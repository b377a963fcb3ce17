use serde::{Deserialize, Serialize};

/// One page of a filtered sequence plus the metadata a pager needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub data: Vec<T>,
    /// 1-indexed page that was requested.
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
}

impl<T> PageResult<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}
