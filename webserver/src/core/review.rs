//! Submission review logic
//!
//! The collection is passed in and the updated collection handed back; the
//! caller owns the authoritative copy.

use artistly_shared::{Decision, ReviewStatus, StatusFilter, Submission, SubmissionId, TransitionPolicy};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    #[error("Submission {id} is already {current} and cannot become {requested}")]
    AlreadyResolved {
        id: SubmissionId,
        current: ReviewStatus,
        requested: ReviewStatus,
    },
}

/// Free-text match: case-insensitive substring of name, email or location
pub fn matches_query(submission: &Submission, query: &str) -> bool {
    let needle = query.to_lowercase();
    [&submission.name, &submission.email, &submission.location]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn submission_matches(submission: &Submission, query: &str, status: &StatusFilter) -> bool {
    matches_query(submission, query) && status.admits(&submission.status)
}

/// Display filter of the dashboard table, order preserving
pub fn filter_submissions(submissions: &[Submission], query: &str, status: &StatusFilter) -> Vec<Submission> {
    submissions
        .iter()
        .filter(|submission| submission_matches(submission, query, status))
        .cloned()
        .collect()
}

/// Overwrite the status of every submission with `id`.
///
/// Unknown ids leave the collection untouched. Resolved submissions are
/// overwritten too; use [`transition_status_with_policy`] to forbid that.
pub fn transition_status(mut submissions: Vec<Submission>, id: &SubmissionId, decision: Decision) -> Vec<Submission> {
    for submission in submissions.iter_mut().filter(|s| s.id == *id) {
        submission.status = decision.into();
    }
    submissions
}

/// Status transition honouring the configured policy.
///
/// Under [`TransitionPolicy::Strict`] a resolved submission only accepts its
/// current status again.
pub fn transition_status_with_policy(
    submissions: Vec<Submission>,
    id: &SubmissionId,
    decision: Decision,
    policy: TransitionPolicy,
) -> Result<Vec<Submission>, ReviewError> {
    if policy == TransitionPolicy::Strict {
        let requested = ReviewStatus::from(decision);
        let conflict = submissions
            .iter()
            .filter(|s| s.id == *id)
            .map(|s| s.status)
            .find(|current| current.is_terminal() && *current != requested);
        if let Some(current) = conflict {
            return Err(ReviewError::AlreadyResolved {
                id: id.clone(),
                current,
                requested,
            });
        }
    }

    Ok(transition_status(submissions, id, decision))
}
