//! Fetched character records.

use serde::{Deserialize, Serialize};

/// One character as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultRecord {
    pub id: String,

    pub name: String,

    /// Avatar image URL.
    pub image: String,

    pub species: String,

    /// Life status as reported by the API (`Alive`, `Dead`, `unknown`).
    pub status: String,

    pub gender: String,

    /// Name of the place of origin.
    pub origin_name: String,

    /// Name of the last known location.
    pub location_name: String,
}

/// One page of results plus the total page count for the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPage {
    /// Total pages available for the request's filters.
    pub total_pages: u32,

    pub results: Vec<ResultRecord>,
}

impl CharacterPage {
    /// Create a page.
    pub fn new(total_pages: u32, results: Vec<ResultRecord>) -> Self {
        Self {
            total_pages,
            results,
        }
    }

    /// Whether the page holds no records.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
