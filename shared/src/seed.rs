//! Built-in demo dataset and seed file loading

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{SharedError, SharedResult};
use crate::types::{Artist, ArtistId, ReviewStatus, Submission, SubmissionId};

const MAX_RATING: f32 = 5.0;

const PHOTO_PARAMS: &str = "?auto=compress&cs=tinysrgb&w=400";

fn photo(id: u32) -> String {
    format!("https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg{PHOTO_PARAMS}")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn artist(
    id: &str,
    name: &str,
    categories: &[&str],
    bio: &str,
    price_range: &str,
    location: &str,
    languages: &[&str],
    photo_id: u32,
    rating: f32,
    verified: bool,
) -> Artist {
    Artist {
        id: ArtistId::new(id),
        name: name.to_string(),
        categories: strings(categories),
        bio: bio.to_string(),
        price_range: price_range.to_string(),
        location: location.to_string(),
        languages: strings(languages),
        image: photo(photo_id),
        rating,
        verified,
    }
}

/// The demo catalog
pub fn mock_artists() -> Vec<Artist> {
    vec![
        artist(
            "1",
            "Sofia Martinez",
            &["Singer", "Performer"],
            "Professional vocalist specializing in jazz, pop, and Latin music with 8+ years of experience.",
            "$500-1000",
            "New York, NY",
            &["English", "Spanish"],
            1587927,
            4.8,
            true,
        ),
        artist(
            "2",
            "Marcus Johnson",
            &["DJ", "Producer"],
            "Electronic music producer and DJ specializing in house, techno, and ambient music.",
            "$300-750",
            "Los Angeles, CA",
            &["English"],
            1105666,
            4.9,
            true,
        ),
        artist(
            "3",
            "Elena Rodriguez",
            &["Dancer", "Choreographer"],
            "Contemporary and ballroom dance instructor with competitive dance background.",
            "$400-800",
            "Miami, FL",
            &["English", "Spanish", "Portuguese"],
            1190297,
            4.7,
            true,
        ),
        artist(
            "4",
            "David Chen",
            &["Speaker", "Comedian"],
            "Motivational speaker and stand-up comedian with expertise in corporate events.",
            "$600-1200",
            "San Francisco, CA",
            &["English", "Mandarin"],
            1222271,
            4.6,
            false,
        ),
        artist(
            "5",
            "Aria Thompson",
            &["Singer", "Songwriter"],
            "Indie folk singer-songwriter with a soulful voice and original compositions.",
            "$350-650",
            "Austin, TX",
            &["English"],
            1190297,
            4.5,
            true,
        ),
        artist(
            "6",
            "Ryan O'Connor",
            &["Magician", "Performer"],
            "Professional close-up and stage magician specializing in corporate entertainment.",
            "$450-900",
            "Chicago, IL",
            &["English"],
            1681010,
            4.4,
            true,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn submission(
    id: &str,
    name: &str,
    email: &str,
    categories: &[&str],
    location: &str,
    price_range: &str,
    status: ReviewStatus,
    day: u32,
    languages: &[&str],
) -> Submission {
    Submission {
        id: SubmissionId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        categories: strings(categories),
        location: location.to_string(),
        price_range: price_range.to_string(),
        status,
        submitted_at: NaiveDate::from_ymd_opt(2025, 1, day).unwrap_or_default(),
        languages: strings(languages),
    }
}

/// The demo review queue
pub fn mock_submissions() -> Vec<Submission> {
    vec![
        submission(
            "1",
            "Alex Rivera",
            "alex.rivera@email.com",
            &["Singer", "Songwriter"],
            "Nashville, TN",
            "$400-800",
            ReviewStatus::Pending,
            12,
            &["English", "Spanish"],
        ),
        submission(
            "2",
            "Maya Patel",
            "maya.patel@email.com",
            &["Dancer", "Choreographer"],
            "Los Angeles, CA",
            "$300-600",
            ReviewStatus::Approved,
            11,
            &["English", "Hindi"],
        ),
        submission(
            "3",
            "Jordan Kim",
            "jordan.kim@email.com",
            &["DJ", "Producer"],
            "New York, NY",
            "$500-1000",
            ReviewStatus::Pending,
            10,
            &["English", "Korean"],
        ),
        submission(
            "4",
            "Emma Thompson",
            "emma.thompson@email.com",
            &["Speaker", "Coach"],
            "San Francisco, CA",
            "$800-1500",
            ReviewStatus::Approved,
            9,
            &["English"],
        ),
        submission(
            "5",
            "Carlos Santos",
            "carlos.santos@email.com",
            &["Magician"],
            "Miami, FL",
            "$350-700",
            ReviewStatus::Rejected,
            8,
            &["English", "Spanish", "Portuguese"],
        ),
    ]
}

/// Startup dataset: catalog plus review queue
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub submissions: Vec<Submission>,
}

impl SeedData {
    pub fn builtin() -> Self {
        Self {
            artists: mock_artists(),
            submissions: mock_submissions(),
        }
    }

    /// Parse and validate a seed file body: `{"artists": [...], "submissions": [...]}`
    pub fn from_json(body: &str) -> SharedResult<Self> {
        let seed: Self = serde_json::from_str(body).map_err(|e| SharedError::SeedParse { message: e.to_string() })?;
        seed.validate()?;
        Ok(seed)
    }

    /// Ids are unique per collection, every artist has a category and a
    /// rating within 0..=5.
    pub fn validate(&self) -> SharedResult<()> {
        let mut artist_ids = HashSet::new();
        for artist in &self.artists {
            let record = format!("artist {}", artist.id);
            if !artist_ids.insert(&artist.id) {
                return Err(SharedError::invalid_seed(record, "duplicate id"));
            }
            if artist.categories.is_empty() {
                return Err(SharedError::invalid_seed(record, "no categories"));
            }
            if !(0.0..=MAX_RATING).contains(&artist.rating) {
                return Err(SharedError::invalid_seed(
                    record,
                    format!("rating {} outside 0-{MAX_RATING}", artist.rating),
                ));
            }
        }

        let mut submission_ids = HashSet::new();
        for submission in &self.submissions {
            if !submission_ids.insert(&submission.id) {
                return Err(SharedError::invalid_seed(format!("submission {}", submission.id), "duplicate id"));
            }
        }

        Ok(())
    }
}

impl Default for SeedData {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artist_json(id: &str, categories: &str, rating: f32) -> String {
        format!(
            r#"{{"id": "{id}", "name": "Test Artist", "category": {categories}, "bio": "Bio",
                "priceRange": "$500-1000", "location": "Austin, TX", "languages": ["English"],
                "image": "https://example.com/a.jpg", "rating": {rating}, "verified": false}}"#
        )
    }

    fn submission_json(id: &str) -> String {
        format!(
            r#"{{"id": "{id}", "name": "Applicant", "email": "applicant@email.com",
                "categories": ["Singer"], "location": "Austin, TX", "priceRange": "$400-800",
                "status": "pending", "submittedAt": "2025-01-10", "languages": ["English"]}}"#
        )
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let seed = SeedData::builtin();
        let artist_ids: HashSet<_> = seed.artists.iter().map(|a| &a.id).collect();
        let submission_ids: HashSet<_> = seed.submissions.iter().map(|s| &s.id).collect();
        assert_eq!(artist_ids.len(), seed.artists.len());
        assert_eq!(submission_ids.len(), seed.submissions.len());
        assert!(seed.validate().is_ok());
    }

    #[test]
    fn test_seed_file_accepts_valid_records() {
        let body = format!(
            r#"{{"artists": [{}, {}], "submissions": [{}]}}"#,
            artist_json("a1", r#"["Singer"]"#, 4.5),
            artist_json("a2", r#"["DJ"]"#, 0.0),
            submission_json("s1")
        );
        let seed = SeedData::from_json(&body).unwrap();
        assert_eq!(seed.artists.len(), 2);
        assert_eq!(seed.submissions[0].status, ReviewStatus::Pending);
    }

    #[test]
    fn test_seed_file_rejects_artist_without_categories() {
        let body = format!(r#"{{"artists": [{}]}}"#, artist_json("a1", "[]", 4.0));
        let err = SeedData::from_json(&body).unwrap_err();
        assert_eq!(err, SharedError::invalid_seed("artist a1", "no categories"));
    }

    #[test]
    fn test_seed_file_rejects_rating_out_of_range() {
        let body = format!(r#"{{"artists": [{}]}}"#, artist_json("a1", r#"["Singer"]"#, 42.0));
        let err = SeedData::from_json(&body).unwrap_err();
        assert!(matches!(err, SharedError::InvalidSeed { ref record, .. } if record == "artist a1"));

        let body = format!(r#"{{"artists": [{}]}}"#, artist_json("a1", r#"["Singer"]"#, -1.0));
        assert!(SeedData::from_json(&body).is_err());
    }

    #[test]
    fn test_seed_file_rejects_duplicate_artist_ids() {
        let body = format!(
            r#"{{"artists": [{}, {}, {}]}}"#,
            artist_json("1", r#"["Singer"]"#, 4.0),
            artist_json("2", r#"["DJ"]"#, 4.0),
            artist_json("1", r#"["Dancer"]"#, 4.0)
        );
        let err = SeedData::from_json(&body).unwrap_err();
        assert_eq!(err, SharedError::invalid_seed("artist 1", "duplicate id"));
    }

    #[test]
    fn test_seed_file_rejects_duplicate_submission_ids() {
        let body = format!(
            r#"{{"submissions": [{}, {}, {}]}}"#,
            submission_json("7"),
            submission_json("8"),
            submission_json("7")
        );
        let err = SeedData::from_json(&body).unwrap_err();
        assert_eq!(err, SharedError::invalid_seed("submission 7", "duplicate id"));
        assert_eq!(err.to_string(), "Invalid seed record submission 7: duplicate id");
    }

    #[test]
    fn test_submission_dates() {
        let submissions = mock_submissions();
        assert_eq!(submissions[0].submitted_at.to_string(), "2025-01-12");
        assert_eq!(submissions[4].submitted_at.to_string(), "2025-01-08");
    }

    #[test]
    fn test_seed_file_with_missing_sections() {
        let seed = SeedData::from_json(r#"{"artists": []}"#).unwrap();
        assert!(seed.artists.is_empty());
        assert!(seed.submissions.is_empty());

        let err = SeedData::from_json("not json").unwrap_err();
        assert!(matches!(err, SharedError::SeedParse { .. }));
    }
}
