//! Page cursor and the request descriptor derived from browse state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::filter::{FilterDimension, FilterSelection};

/// 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageCursor(u32);

impl PageCursor {
    /// The first page.
    pub const FIRST: PageCursor = PageCursor(1);

    /// Create a cursor, clamping anything below 1 to 1.
    pub fn new(page: u32) -> Self {
        Self(page.max(1))
    }

    /// Page number.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Previous page, staying at 1.
    pub fn prev(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }

    /// Next page, bounded by the last known total.
    ///
    /// Unknown totals leave the cursor where it is.
    pub fn next(self, total_pages: Option<u32>) -> Self {
        match total_pages {
            Some(total) => Self::new(total.min(self.0.saturating_add(1))),
            None => self,
        }
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PageCursor {
    type Error = String;

    fn try_from(page: u32) -> Result<Self, Self::Error> {
        if page == 0 {
            return Err("page cursor must be at least 1".to_string());
        }
        Ok(Self(page))
    }
}

impl From<PageCursor> for u32 {
    fn from(cursor: PageCursor) -> Self {
        cursor.0
    }
}

/// Parameters of one character fetch.
///
/// Equality is value equality, which is what identifies a request when its
/// response comes back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestDescriptor {
    pub page: u32,

    pub name_query: String,

    pub species: String,

    pub status: String,

    pub gender: String,
}

impl RequestDescriptor {
    /// Derive the request for a filter selection and page.
    pub fn derive(filters: &FilterSelection, page: PageCursor) -> Self {
        Self {
            page: page.get(),
            name_query: filters.name_query.clone(),
            species: filters.query_value(FilterDimension::Species).to_string(),
            status: filters.query_value(FilterDimension::Status).to_string(),
            gender: filters.query_value(FilterDimension::Gender).to_string(),
        }
    }
}
