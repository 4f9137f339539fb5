use carepath_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriageError {
    #[error("failed to load assessment data: {0}")]
    Load(#[from] CoreError),
}
