//! Interfaces to the collaborators that own stored data.
//!
//! The triage engine never performs I/O itself; callers hand it a snapshot
//! obtained through these traits.

use uuid::Uuid;

use crate::error::CoreError;
use crate::models::patient::PatientContext;
use crate::models::response::ResponseSnapshot;

/// Source of recorded questionnaire answers.
pub trait ResponseRepository {
    fn responses(&self, assessment_id: Uuid) -> Result<ResponseSnapshot, CoreError>;
}

/// Source of the demographic facts used for population-specific thresholds.
pub trait PatientDemographics {
    fn patient(&self, assessment_id: Uuid) -> Result<PatientContext, CoreError>;
}
