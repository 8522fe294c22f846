//! Type definitions for webserver
//!
//! Request and response bodies of the JSON API. Raw query values stay
//! strings here and are resolved against the taxonomy by the handlers.

use artistly_shared::{Artist, FilterSelection, StatusFilter, Submission};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::ReviewSummary;

/// Query string of `GET /api/artists`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistQuery {
    /// Comma separated category names or ids
    pub categories: Option<String>,
    pub location: Option<String>,
    pub price: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtistListResponse {
    pub count: usize,
    pub label: String,
    pub has_active_filters: bool,
    pub selection: FilterSelection,
    pub artists: Vec<Artist>,
}

/// Query string of `GET /api/submissions`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionQuery {
    /// Free-text search over name, email and location
    #[serde(default)]
    pub q: String,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionListResponse {
    pub count: usize,
    pub query: String,
    pub status: StatusFilter,
    pub submissions: Vec<Submission>,
}

/// Body of `POST /api/submissions/:id/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChangeRequest {
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusChangeResponse {
    pub submission: Submission,
    pub badge: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub summary: ReviewSummary,
    pub transition_policy: String,
}

/// Artist application captured by the onboarding form.
///
/// Only the JSON shape is checked; field rules are the form's business.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingApplication {
    pub name: String,
    pub bio: String,
    pub categories: Vec<String>,
    pub languages: Vec<String>,
    pub price_range: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    /// Data URI of the profile photo preview
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingReceipt {
    pub application_id: Uuid,
    pub status: String,
    pub message: String,
}

impl OnboardingReceipt {
    pub fn received() -> Self {
        Self {
            application_id: Uuid::new_v4(),
            status: "received".to_string(),
            message: "Thank you for joining Artistly! We'll review your application and get back to you within 2-3 business days.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_onboarding_application_accepts_form_payload() {
        let json = serde_json::json!({
            "name": "Lena Ortiz",
            "bio": "Jazz pianist and vocalist performing at weddings and corporate galas.",
            "categories": ["Musician", "Singer"],
            "languages": ["English", "Spanish"],
            "priceRange": "$750-1000",
            "location": "Boston, MA",
            "email": "lena@example.com",
            "phone": "6175550100"
        });

        let application: OnboardingApplication = serde_json::from_value(json).unwrap();
        assert_eq!(application.price_range, "$750-1000");
        assert!(application.image.is_none());
    }

    #[test]
    fn test_receipts_are_unique() {
        let first = OnboardingReceipt::received();
        let second = OnboardingReceipt::received();
        assert_ne!(first.application_id, second.application_id);
        assert_eq!(first.status, "received");
    }
}
