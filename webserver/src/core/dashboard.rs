//! Headline numbers of the review dashboard

use artistly_shared::{ReviewStatus, Submission};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

pub fn summarize(submissions: &[Submission]) -> ReviewSummary {
    submissions.iter().fold(
        ReviewSummary {
            total: submissions.len(),
            ..ReviewSummary::default()
        },
        |mut summary, submission| {
            match submission.status {
                ReviewStatus::Pending => summary.pending += 1,
                ReviewStatus::Approved => summary.approved += 1,
                ReviewStatus::Rejected => summary.rejected += 1,
            }
            summary
        },
    )
}
