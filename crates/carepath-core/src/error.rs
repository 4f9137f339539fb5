use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown questionnaire: {0}")]
    UnknownQuestionnaire(String),

    #[error("assessment not found: {0}")]
    AssessmentNotFound(Uuid),

    #[error("invalid status transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: crate::models::assessment::AssessmentStatus,
        to: crate::models::assessment::AssessmentStatus,
    },

    #[error("repository error: {0}")]
    Repository(String),
}
