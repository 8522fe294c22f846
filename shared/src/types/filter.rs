//! Filter constraints held by the listing and review views

use serde::{Serialize, Serializer};

use crate::types::submission::ReviewStatus;

/// Wire value meaning "no constraint"
pub const ALL: &str = "all";

/// A single-valued filter that is either unconstrained or pinned to one value
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Constraint<T> {
    #[default]
    Any,
    Only(T),
}

impl<T> Constraint<T> {
    pub fn is_any(&self) -> bool {
        matches!(self, Constraint::Any)
    }

    /// True when unconstrained or when `value` satisfies `eq` against the pinned value
    pub fn admits_by<U: ?Sized>(&self, value: &U, eq: impl Fn(&T, &U) -> bool) -> bool {
        match self {
            Constraint::Any => true,
            Constraint::Only(expected) => eq(expected, value),
        }
    }
}

impl<T: PartialEq> Constraint<T> {
    pub fn admits(&self, value: &T) -> bool {
        self.admits_by(value, |expected, actual| expected == actual)
    }
}

impl<T: Serialize> Serialize for Constraint<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Constraint::Any => serializer.serialize_str(ALL),
            Constraint::Only(value) => value.serialize(serializer),
        }
    }
}

/// Status filter of the review dashboard
pub type StatusFilter = Constraint<ReviewStatus>;

/// Current filter constraints of the artist listing.
///
/// Lives for one page view; never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    /// Empty means no category constraint
    pub categories: Vec<String>,
    pub location: Constraint<String>,
    pub price_range: Constraint<String>,
}

impl FilterSelection {
    /// Selection that admits the whole catalog
    pub fn unconstrained() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.toggle_category(category, true);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Constraint::Only(location.into());
        self
    }

    pub fn with_price_range(mut self, price_range: impl Into<String>) -> Self {
        self.price_range = Constraint::Only(price_range.into());
        self
    }

    /// Check or uncheck a category box
    pub fn toggle_category(&mut self, category: impl Into<String>, checked: bool) {
        let category = category.into();
        if checked {
            if !self.categories.contains(&category) {
                self.categories.push(category);
            }
        } else {
            self.categories.retain(|c| *c != category);
        }
    }

    pub fn clear(&mut self) {
        *self = Self::unconstrained();
    }

    pub fn has_active_filters(&self) -> bool {
        !self.categories.is_empty() || !self.location.is_any() || !self.price_range.is_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_category_adds_once_and_removes() {
        let mut selection = FilterSelection::unconstrained();
        selection.toggle_category("Singer", true);
        selection.toggle_category("Singer", true);
        selection.toggle_category("DJ", true);
        assert_eq!(selection.categories, vec!["Singer", "DJ"]);

        selection.toggle_category("Singer", false);
        assert_eq!(selection.categories, vec!["DJ"]);
    }

    #[test]
    fn test_active_filters_and_clear() {
        let mut selection = FilterSelection::unconstrained();
        assert!(!selection.has_active_filters());

        selection = selection.with_price_range("$250-500");
        assert!(selection.has_active_filters());

        selection.clear();
        assert_eq!(selection, FilterSelection::unconstrained());
    }

    #[test]
    fn test_constraint_serializes_any_as_all() {
        let selection = FilterSelection::unconstrained().with_location("Miami, FL");
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json["location"], "Miami, FL");
        assert_eq!(json["price_range"], "all");
    }

    #[test]
    fn test_status_filter_admits() {
        let any: StatusFilter = Constraint::Any;
        let approved = Constraint::Only(ReviewStatus::Approved);
        assert!(any.admits(&ReviewStatus::Rejected));
        assert!(approved.admits(&ReviewStatus::Approved));
        assert!(!approved.admits(&ReviewStatus::Pending));
    }
}
