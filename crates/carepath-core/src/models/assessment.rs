use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Lifecycle of an assessment record. Owned by the persistence layer; the
/// triage engine never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentStatus {
    NotStarted,
    InProgress,
    Completed,
    /// Set externally when an assessment times out before completion.
    Stale,
}

impl AssessmentStatus {
    pub fn can_transition_to(self, next: AssessmentStatus) -> bool {
        use AssessmentStatus::*;
        matches!(
            (self, next),
            (NotStarted, InProgress)
                | (InProgress, Completed)
                | (NotStarted, Stale)
                | (InProgress, Stale)
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub status: AssessmentStatus,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl AssessmentRecord {
    pub fn new(patient_id: Uuid) -> Self {
        let now = jiff::Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            patient_id,
            status: AssessmentStatus::NotStarted,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn transition(&mut self, next: AssessmentStatus) -> Result<(), CoreError> {
        if !self.status.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        self.updated_at = jiff::Timestamp::now();
        Ok(())
    }
}
