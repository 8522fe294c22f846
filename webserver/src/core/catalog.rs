//! Artist filter engine
//!
//! Pure functions over a catalog slice. Results keep catalog order.

use artistly_shared::{Artist, ArtistId, FilterSelection};

/// Category rule: some selected category is a case-insensitive substring of
/// some artist tag. The direction matters: `dj` matches `DJ Producer`,
/// `dj producer` does not match `DJ`.
pub fn category_matches(selected: &[String], artist_tags: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }

    selected.iter().any(|category| {
        let needle = category.to_lowercase();
        artist_tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
    })
}

/// True when the artist satisfies all three constraints of the selection
pub fn artist_matches(artist: &Artist, selection: &FilterSelection) -> bool {
    category_matches(&selection.categories, &artist.categories)
        && selection
            .location
            .admits_by(artist.location.as_str(), |expected, actual| expected == actual)
        && selection
            .price_range
            .admits_by(artist.price_range.as_str(), |expected, actual| expected == actual)
}

/// Matching subset of the catalog, in catalog order
pub fn filter_artists(catalog: &[Artist], selection: &FilterSelection) -> Vec<Artist> {
    catalog
        .iter()
        .filter(|artist| artist_matches(artist, selection))
        .cloned()
        .collect()
}

pub fn find_artist<'a>(catalog: &'a [Artist], id: &ArtistId) -> Option<&'a Artist> {
    catalog.iter().find(|artist| artist.id == *id)
}

/// Result count line of the listing, e.g. "1 artist found"
pub fn result_label(count: usize) -> String {
    let noun = if count == 1 { "artist" } else { "artists" };
    format!("{count} {noun} found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use artistly_shared::seed::mock_artists;

    fn ids(artists: &[Artist]) -> Vec<&str> {
        artists.iter().map(|a| a.id.as_str()).collect()
    }

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_unconstrained_selection_returns_catalog() {
        let catalog = mock_artists();
        let result = filter_artists(&catalog, &FilterSelection::unconstrained());
        assert_eq!(result, catalog);
    }

    #[test]
    fn test_singer_selection() {
        let catalog = mock_artists();
        let selection = FilterSelection::unconstrained().with_category("Singer");
        assert_eq!(ids(&filter_artists(&catalog, &selection)), vec!["1", "5"]);
    }

    #[test]
    fn test_substring_direction() {
        assert!(category_matches(&tags(&["dj"]), &tags(&["DJ Producer"])));
        assert!(!category_matches(&tags(&["dj producer"]), &tags(&["DJ"])));
    }

    #[test]
    fn test_substring_matches_inside_longer_tags() {
        // "Singer" is contained in "Singer-Songwriter"
        assert!(category_matches(&tags(&["singer"]), &tags(&["Singer-Songwriter"])));
        assert!(!category_matches(&tags(&["Magician"]), &tags(&["Singer-Songwriter"])));
    }

    #[test]
    fn test_categories_are_or_combined() {
        let catalog = mock_artists();
        let selection = FilterSelection::unconstrained()
            .with_category("DJ")
            .with_category("Magician");
        assert_eq!(ids(&filter_artists(&catalog, &selection)), vec!["2", "6"]);
    }

    #[test]
    fn test_constraints_are_and_combined() {
        let catalog = mock_artists();
        let selection = FilterSelection::unconstrained()
            .with_category("Performer")
            .with_location("Chicago, IL");
        assert_eq!(ids(&filter_artists(&catalog, &selection)), vec!["6"]);

        let selection = selection.with_price_range("$500-1000");
        assert!(filter_artists(&catalog, &selection).is_empty());
    }

    #[test]
    fn test_location_and_price_are_exact() {
        let catalog = mock_artists();
        let selection = FilterSelection::unconstrained().with_location("new york, ny");
        assert!(filter_artists(&catalog, &selection).is_empty());

        let selection = FilterSelection::unconstrained().with_price_range("$500-1000");
        assert_eq!(ids(&filter_artists(&catalog, &selection)), vec!["1"]);
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let catalog = mock_artists();
        let selection = FilterSelection::unconstrained().with_category("er");
        let result = filter_artists(&catalog, &selection);

        let mut positions = result
            .iter()
            .map(|artist| catalog.iter().position(|c| c == artist).unwrap());
        let mut last = positions.next().unwrap();
        for position in positions {
            assert!(position > last);
            last = position;
        }
    }

    #[test]
    fn test_empty_catalog() {
        let selection = FilterSelection::unconstrained().with_category("Singer");
        assert!(filter_artists(&[], &selection).is_empty());
        assert!(find_artist(&[], &ArtistId::from("1")).is_none());
    }

    #[test]
    fn test_find_artist_and_label() {
        let catalog = mock_artists();
        let artist = find_artist(&catalog, &ArtistId::from("4")).unwrap();
        assert_eq!(artist.name, "David Chen");

        assert_eq!(result_label(1), "1 artist found");
        assert_eq!(result_label(0), "0 artists found");
        assert_eq!(result_label(6), "6 artists found");
    }
}
