//! Catalog records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a catalog artist
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(String);

impl ArtistId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ArtistId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bookable performer in the public catalog.
///
/// Records are immutable once loaded; the catalog has no write operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    /// Category tags, e.g. `["DJ", "Producer"]`
    #[serde(rename = "category")]
    pub categories: Vec<String>,
    pub bio: String,
    pub price_range: String,
    pub location: String,
    pub languages: Vec<String>,
    pub image: String,
    /// 0.0 to 5.0
    pub rating: f32,
    pub verified: bool,
}
