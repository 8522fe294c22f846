//! Review dashboard records and the review status state machine values

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SharedError;

/// Identifier of an applicant submission
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(String);

impl SubmissionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SubmissionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Review outcome of a submission
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    /// Approved and rejected are terminal in the intended workflow
    pub fn is_terminal(self) -> bool {
        !matches!(self, ReviewStatus::Pending)
    }

    /// Badge text shown on the dashboard
    pub fn label(self) -> &'static str {
        match self {
            ReviewStatus::Pending => "Pending",
            ReviewStatus::Approved => "Approved",
            ReviewStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewStatus::Pending => write!(f, "pending"),
            ReviewStatus::Approved => write!(f, "approved"),
            ReviewStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl FromStr for ReviewStatus {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReviewStatus::Pending),
            "approved" => Ok(ReviewStatus::Approved),
            "rejected" => Ok(ReviewStatus::Rejected),
            other => Err(SharedError::UnknownStatus {
                value: other.to_string(),
            }),
        }
    }
}

/// Target of a status transition. `pending` is never a valid target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Rejected,
}

impl From<Decision> for ReviewStatus {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Approved => ReviewStatus::Approved,
            Decision::Rejected => ReviewStatus::Rejected,
        }
    }
}

impl FromStr for Decision {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(Decision::Approved),
            "rejected" => Ok(Decision::Rejected),
            other => Err(SharedError::InvalidDecision {
                value: other.to_string(),
            }),
        }
    }
}

/// An applicant's review record in the internal dashboard
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: SubmissionId,
    pub name: String,
    pub email: String,
    pub categories: Vec<String>,
    pub location: String,
    pub price_range: String,
    pub status: ReviewStatus,
    pub submitted_at: NaiveDate,
    pub languages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing_rejects_unknown_values() {
        assert_eq!("approved".parse::<ReviewStatus>(), Ok(ReviewStatus::Approved));
        assert!("Approved".parse::<ReviewStatus>().is_err());
        assert!("archived".parse::<ReviewStatus>().is_err());
    }

    #[test]
    fn test_pending_is_not_a_decision() {
        let err = "pending".parse::<Decision>().unwrap_err();
        assert_eq!(
            err,
            SharedError::InvalidDecision {
                value: "pending".to_string()
            }
        );
        assert_eq!(ReviewStatus::from(Decision::Rejected), ReviewStatus::Rejected);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!ReviewStatus::Pending.is_terminal());
        assert!(ReviewStatus::Approved.is_terminal());
        assert!(ReviewStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_submission_wire_format_uses_camel_case() {
        let json = serde_json::json!({
            "id": "9",
            "name": "Test Applicant",
            "email": "test@email.com",
            "categories": ["Singer"],
            "location": "Boston, MA",
            "priceRange": "$250-500",
            "status": "pending",
            "submittedAt": "2025-01-12",
            "languages": ["English"]
        });

        let submission: Submission = serde_json::from_value(json).unwrap();
        assert_eq!(submission.id.as_str(), "9");
        assert_eq!(submission.status, ReviewStatus::Pending);
        assert_eq!(submission.submitted_at, NaiveDate::from_ymd_opt(2025, 1, 12).unwrap());
    }
}
