//! Published filter options and parsing of raw filter values
//!
//! Every raw value coming from a request is resolved against the taxonomy.
//! `all` (or an absent value) is the only spelling of "no constraint";
//! anything unrecognized is an error rather than a silent wildcard.

use serde::{Deserialize, Serialize};

use crate::errors::{SharedError, SharedResult};
use crate::types::artist::Artist;
use crate::types::filter::{ALL, Constraint, FilterSelection, StatusFilter};

/// A browsable category with its display icon
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub id: String,
    pub name: String,
    pub icon: String,
}

impl CategoryOption {
    fn new(id: &str, name: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Taxonomy {
    pub categories: Vec<CategoryOption>,
    pub locations: Vec<String>,
    pub price_ranges: Vec<String>,
    pub languages: Vec<String>,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Taxonomy {
    /// The option lists offered by the listing and onboarding views
    pub fn standard() -> Self {
        Self {
            categories: vec![
                CategoryOption::new("singer", "Singer", "🎤"),
                CategoryOption::new("dj", "DJ", "🎧"),
                CategoryOption::new("dancer", "Dancer", "💃"),
                CategoryOption::new("speaker", "Speaker", "🎯"),
                CategoryOption::new("comedian", "Comedian", "😄"),
                CategoryOption::new("magician", "Magician", "🎩"),
                CategoryOption::new("musician", "Musician", "🎸"),
                CategoryOption::new("performer", "Performer", "🎭"),
            ],
            locations: owned(&[
                "New York, NY",
                "Los Angeles, CA",
                "Chicago, IL",
                "Miami, FL",
                "Austin, TX",
                "San Francisco, CA",
                "Seattle, WA",
                "Boston, MA",
            ]),
            price_ranges: owned(&["$0-250", "$250-500", "$500-750", "$750-1000", "$1000-1500", "$1500+"]),
            languages: owned(&[
                "English",
                "Spanish",
                "French",
                "German",
                "Italian",
                "Portuguese",
                "Mandarin",
                "Japanese",
                "Korean",
                "Arabic",
            ]),
        }
    }

    /// Append locations and price labels used by the catalog but missing from
    /// the published lists, so every artist stays reachable by exact filters.
    pub fn extended_with(mut self, catalog: &[Artist]) -> Self {
        for artist in catalog {
            if !self.locations.contains(&artist.location) {
                self.locations.push(artist.location.clone());
            }
            if !self.price_ranges.contains(&artist.price_range) {
                self.price_ranges.push(artist.price_range.clone());
            }
        }
        self
    }

    /// Resolve a category by name or id, case-insensitively, to its display name
    pub fn resolve_category(&self, raw: &str) -> SharedResult<String> {
        let needle = raw.trim();
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(needle) || c.id.eq_ignore_ascii_case(needle))
            .map(|c| c.name.clone())
            .ok_or_else(|| SharedError::unknown_filter("category", raw))
    }

    pub fn resolve_location(&self, raw: Option<&str>) -> SharedResult<Constraint<String>> {
        resolve_exact("location", &self.locations, raw)
    }

    pub fn resolve_price_range(&self, raw: Option<&str>) -> SharedResult<Constraint<String>> {
        resolve_exact("price", &self.price_ranges, raw)
    }

    /// Build a selection from raw request values.
    ///
    /// `categories` is a comma separated list; blank entries are ignored.
    pub fn selection_from_params(
        &self,
        categories: Option<&str>,
        location: Option<&str>,
        price_range: Option<&str>,
    ) -> SharedResult<FilterSelection> {
        let mut selection = FilterSelection::unconstrained();

        for raw in categories.unwrap_or_default().split(',') {
            if raw.trim().is_empty() {
                continue;
            }
            selection.toggle_category(self.resolve_category(raw)?, true);
        }

        selection.location = self.resolve_location(location)?;
        selection.price_range = self.resolve_price_range(price_range)?;
        Ok(selection)
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::standard()
    }
}

fn resolve_exact(field: &str, known: &[String], raw: Option<&str>) -> SharedResult<Constraint<String>> {
    match raw {
        None | Some(ALL) => Ok(Constraint::Any),
        Some(value) if known.iter().any(|k| k == value) => Ok(Constraint::Only(value.to_string())),
        Some(value) => Err(SharedError::unknown_filter(field, value)),
    }
}

/// Parse the dashboard status filter; absent or `all` means unconstrained
pub fn parse_status_filter(raw: Option<&str>) -> SharedResult<StatusFilter> {
    match raw {
        None | Some(ALL) => Ok(Constraint::Any),
        Some(value) => Ok(Constraint::Only(value.parse()?)),
    }
}
