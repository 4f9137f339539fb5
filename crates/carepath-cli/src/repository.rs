//! JSON-file implementation of the response and demographics collaborators.

use std::path::{Path, PathBuf};

use carepath_core::error::CoreError;
use carepath_core::models::patient::PatientContext;
use carepath_core::models::response::ResponseSnapshot;
use carepath_core::repository::{PatientDemographics, ResponseRepository};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// On-disk shape of an exported assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentFile {
    /// Nil when the export does not carry an id.
    #[serde(default)]
    pub id: Uuid,
    #[serde(default)]
    pub patient: PatientContext,
    pub responses: ResponseSnapshot,
}

/// Serves a single exported assessment from a JSON file.
#[derive(Debug, Clone)]
pub struct FileRepository {
    path: PathBuf,
    file: AssessmentFile,
}

impl FileRepository {
    pub fn open(path: &Path) -> Result<Self, CoreError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Repository(format!("failed to read {}: {e}", path.display()))
        })?;
        let file: AssessmentFile = serde_json::from_str(&contents)?;
        tracing::debug!(path = %path.display(), assessment_id = %file.id, "opened assessment file");
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn assessment_id(&self) -> Uuid {
        self.file.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn check(&self, assessment_id: Uuid) -> Result<&AssessmentFile, CoreError> {
        if assessment_id != self.file.id {
            return Err(CoreError::AssessmentNotFound(assessment_id));
        }
        Ok(&self.file)
    }
}

impl ResponseRepository for FileRepository {
    fn responses(&self, assessment_id: Uuid) -> Result<ResponseSnapshot, CoreError> {
        Ok(self.check(assessment_id)?.responses.clone())
    }
}

impl PatientDemographics for FileRepository {
    fn patient(&self, assessment_id: Uuid) -> Result<PatientContext, CoreError> {
        Ok(self.check(assessment_id)?.patient)
    }
}
