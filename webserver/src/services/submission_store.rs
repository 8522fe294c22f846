//! In-memory review queue
//!
//! The store owns the collection behind a lock and pushes it through the
//! pure transition function on every decision.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use artistly_shared::{Component, Decision, Submission, SubmissionId, TransitionPolicy, component_info, component_warn};
use crate::core::transition_status_with_policy;
use crate::error::WebServerResult;
use crate::traits::SubmissionStore;

#[derive(Debug, Clone)]
pub struct InMemorySubmissionStore {
    submissions: Arc<RwLock<Vec<Submission>>>,
    policy: TransitionPolicy,
}

impl InMemorySubmissionStore {
    pub fn new(submissions: Vec<Submission>, policy: TransitionPolicy) -> Self {
        Self {
            submissions: Arc::new(RwLock::new(submissions)),
            policy,
        }
    }
}

impl Default for InMemorySubmissionStore {
    fn default() -> Self {
        Self::new(artistly_shared::seed::mock_submissions(), TransitionPolicy::default())
    }
}

#[async_trait]
impl SubmissionStore for InMemorySubmissionStore {
    async fn snapshot(&self) -> Vec<Submission> {
        self.submissions.read().await.clone()
    }

    async fn set_status(&self, id: &SubmissionId, decision: Decision) -> WebServerResult<Option<Submission>> {
        let mut guard = self.submissions.write().await;

        let Some(previous) = guard.iter().find(|s| s.id == *id).map(|s| s.status) else {
            component_warn!(Component::Review, "⚠️ Status change for unknown submission {}", id);
            return Ok(None);
        };

        // On a policy conflict the stored collection stays as it was
        *guard = transition_status_with_policy(guard.clone(), id, decision, self.policy)?;

        let updated = guard.iter().find(|s| s.id == *id).cloned();
        if let Some(submission) = &updated {
            component_info!(
                Component::Review,
                "📝 Submission {} ({}) moved {} -> {}",
                id,
                submission.name,
                previous,
                submission.status
            );
        }
        Ok(updated)
    }

    fn policy(&self) -> TransitionPolicy {
        self.policy
    }
}
