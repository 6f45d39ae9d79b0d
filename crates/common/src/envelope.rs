use serde::{Deserialize, Serialize};

/// `{ msg, data }` wrapper used by single-record endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub msg: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

/// Page of records returned by list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub size: u32,
    /// Total page count, when the backend reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
}

impl<T> PaginatedResponse<T> {
    /// Page count, derived from `total` and `size` if the backend left it out
    pub fn page_count(&self) -> u32 {
        if let Some(pages) = self.pages {
            return pages;
        }
        if self.size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.size)) as u32
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
