//! Test fixtures for webserver service tests

use artistly_shared::{Artist, ArtistId, ReviewStatus, Submission, SubmissionId};
use chrono::NaiveDate;

/// Create a catalog artist with the given tags, location and price label
pub fn create_test_artist(id: &str, categories: &[&str], location: &str, price_range: &str) -> Artist {
    Artist {
        id: ArtistId::new(id),
        name: format!("Test Artist {id}"),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        bio: "Test performer bio used by service tests.".to_string(),
        price_range: price_range.to_string(),
        location: location.to_string(),
        languages: vec!["English".to_string()],
        image: "https://example.com/artist.jpg".to_string(),
        rating: 4.0,
        verified: false,
    }
}

/// Create a review submission in the given status
pub fn create_test_submission(id: &str, name: &str, status: ReviewStatus) -> Submission {
    Submission {
        id: SubmissionId::new(id),
        name: name.to_string(),
        email: format!("{}@email.com", name.to_lowercase().replace(' ', ".")),
        categories: vec!["Singer".to_string()],
        location: "Seattle, WA".to_string(),
        price_range: "$250-500".to_string(),
        status,
        submitted_at: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        languages: vec!["English".to_string()],
    }
}
