use std::sync::OnceLock;

use carepath_core::models::acuity::AcuityCategory;
use carepath_core::models::disposition::{DiagnosisId, DispositionFlag, DispositionOutcomeCare};
use carepath_core::models::patient::PatientContext;
use carepath_core::models::questionnaire::ScoreMap;
use carepath_core::models::response::ResponseSnapshot;
use carepath_core::repository::{PatientDemographics, ResponseRepository};
use carepath_instruments::all_questionnaires;
use carepath_instruments::engine;
use carepath_instruments::scoring::ValidationError;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::acuity::overall_acuity;
use crate::crisis::{self, CrisisSignal};
use crate::diagnosis::{self, Resolution, RuleContext};
use crate::error::TriageError;
use crate::selection::{self, SelectedDiagnosis};

/// The triage result handed to case management, the reminder scheduler,
/// and dashboards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TriageSummary {
    pub scores: ScoreMap,
    pub is_crisis: bool,
    pub overall_acuity: Option<AcuityCategory>,
    pub diagnosis: DiagnosisId,
    pub care_level: DispositionOutcomeCare,
    pub flag: DispositionFlag,
}

/// One patient's answers, scored on demand.
///
/// Scores are computed at most once per instance and cached. The
/// computation is pure, so an `Assessment` can be shared across threads.
#[derive(Debug)]
pub struct Assessment {
    responses: ResponseSnapshot,
    patient: PatientContext,
    scores: OnceLock<ScoreMap>,
}

impl Assessment {
    pub fn new(responses: ResponseSnapshot, patient: PatientContext) -> Self {
        Self {
            responses,
            patient,
            scores: OnceLock::new(),
        }
    }

    /// Build an assessment from the collaborators that own stored answers
    /// and demographics.
    pub fn load(
        repository: &impl ResponseRepository,
        demographics: &impl PatientDemographics,
        assessment_id: Uuid,
    ) -> Result<Self, TriageError> {
        let responses = repository.responses(assessment_id)?;
        let patient = demographics.patient(assessment_id)?;
        tracing::debug!(%assessment_id, answered = responses.link_ids().count(), "loaded assessment");
        Ok(Self::new(responses, patient))
    }

    pub fn responses(&self) -> &ResponseSnapshot {
        &self.responses
    }

    pub fn patient(&self) -> &PatientContext {
        &self.patient
    }

    pub fn scores(&self) -> &ScoreMap {
        self.scores
            .get_or_init(|| engine::score_all(&self.responses, &self.patient))
    }

    pub fn crisis_signals(&self) -> Vec<CrisisSignal> {
        crisis::crisis_signals(&self.responses)
    }

    pub fn is_crisis(&self) -> bool {
        crisis::is_crisis(&self.responses)
    }

    pub fn overall_acuity(&self) -> Option<AcuityCategory> {
        overall_acuity(self.scores())
    }

    pub fn selections(&self) -> Vec<SelectedDiagnosis> {
        selection::selected_diagnoses(&self.responses)
    }

    pub fn resolution(&self) -> Resolution {
        let selections = self.selections();
        let ctx = RuleContext {
            responses: &self.responses,
            scores: self.scores(),
            is_crisis: self.is_crisis(),
            selections: &selections,
        };
        diagnosis::resolve(&ctx)
    }

    /// Answers that do not fit their question. Scoring ignores them.
    pub fn validation_errors(&self) -> Vec<ValidationError> {
        all_questionnaires()
            .iter()
            .flat_map(|q| q.validate_responses(&self.responses))
            .collect()
    }

    pub fn summary(&self) -> TriageSummary {
        let signals = self.crisis_signals();
        if !signals.is_empty() {
            tracing::warn!(?signals, "crisis signals present");
        }

        let resolution = self.resolution();
        let summary = TriageSummary {
            scores: self.scores().clone(),
            is_crisis: !signals.is_empty(),
            overall_acuity: self.overall_acuity(),
            diagnosis: resolution.diagnosis,
            care_level: resolution.care_level,
            flag: resolution.flag,
        };
        tracing::info!(
            diagnosis = resolution.diagnosis.display_name(),
            care_level = ?summary.care_level,
            flag = ?summary.flag,
            overall_acuity = ?summary.overall_acuity,
            "triage resolved"
        );
        summary
    }
}
