//! carepath-instruments
//!
//! Clinical questionnaire definitions and scoring. Pure data and pure
//! functions, no I/O. Defines the item pool, the administration rules,
//! and the scoring strategy for each supported instrument.

pub mod answers;
pub mod engine;
pub mod error;
pub mod items;
pub mod questionnaires;
pub mod scoring;

use std::collections::HashSet;

use carepath_core::models::patient::PatientContext;
use carepath_core::models::questionnaire::{QuestionnaireId, QuestionnaireScore, ScoreMap};
use carepath_core::models::response::ResponseSnapshot;

use error::InstrumentError;
use scoring::{InstrumentItem, ScoringStrategy, ValidationError};

/// What an administration predicate may look at: the raw answers, the
/// patient, and the scores of instruments earlier in the catalog.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    pub responses: &'a ResponseSnapshot,
    pub patient: &'a PatientContext,
    pub scores: &'a ScoreMap,
}

impl ScoringContext<'_> {
    pub fn answered_yes(&self, item: &InstrumentItem) -> bool {
        answers::is_yes(self.responses, item.link_id)
    }
}

/// Trait implemented by each clinical questionnaire.
pub trait Questionnaire: Send + Sync {
    fn id(&self) -> QuestionnaireId;

    /// Human-readable name (e.g., "PHQ-9", "AUDIT-C").
    fn name(&self) -> &str;

    /// Whether this instrument's acuity counts toward overall acuity.
    fn is_clinical(&self) -> bool;

    /// Mandatory instruments are scored even when not clinical.
    fn is_mandatory(&self) -> bool {
        false
    }

    /// The questions this instrument scores, drawn from the shared pool.
    fn items(&self) -> &[&'static InstrumentItem];

    /// Look up one of this questionnaire's items by link id.
    fn item(&self, link_id: &str) -> Result<&'static InstrumentItem, InstrumentError> {
        self.items()
            .iter()
            .copied()
            .find(|item| item.link_id == link_id)
            .ok_or_else(|| InstrumentError::UnknownItem {
                questionnaire: self.id(),
                link_id: link_id.to_string(),
            })
    }

    /// `None` for informational instruments that never produce a score.
    fn strategy(&self) -> Option<ScoringStrategy>;

    fn is_administered(&self, _ctx: &ScoringContext<'_>) -> bool {
        true
    }

    /// Whether any item carries exactly one recorded answer.
    fn has_answers(&self, responses: &ResponseSnapshot) -> bool {
        self.items()
            .iter()
            .any(|item| responses.single(item.link_id).is_some())
    }

    fn score(&self, ctx: &ScoringContext<'_>) -> Option<QuestionnaireScore> {
        self.strategy()
            .map(|strategy| strategy.score(self.items(), ctx.responses, ctx.patient))
    }

    /// Report answers that do not fit their item's scale. Invalid answers
    /// are ignored by scoring; this only surfaces them.
    fn validate_responses(&self, responses: &ResponseSnapshot) -> Vec<ValidationError> {
        self.items()
            .iter()
            .filter_map(|item| item.validate(responses))
            .map(|mut error| {
                error.message = format!("{}: {}", self.name(), error.message);
                error
            })
            .collect()
    }
}

/// Return all registered questionnaires, in administration order.
pub fn all_questionnaires() -> Vec<Box<dyn Questionnaire>> {
    use questionnaires::*;
    vec![
        Box::new(screening_concerns::ScreeningConcerns),
        Box::new(diagnosis_selection::DiagnosisSelection),
        Box::new(cssrs::Cssrs),
        Box::new(phq4::Phq4),
        Box::new(phq9::Phq9),
        Box::new(gad7::Gad7),
        Box::new(isi::Isi),
        Box::new(asrm::Asrm),
        Box::new(prime5::Prime5),
        Box::new(ptsd5::Ptsd5),
        Box::new(dast10::Dast10),
        Box::new(opioid_screen::OpioidScreen),
        Box::new(audit_c::AuditC),
        Box::new(bpi::Bpi),
    ]
}

/// Look up a questionnaire by ID.
pub fn get_questionnaire(id: QuestionnaireId) -> Option<Box<dyn Questionnaire>> {
    all_questionnaires().into_iter().find(|q| q.id() == id)
}

/// Look up a questionnaire by its string id (e.g., "phq9").
pub fn find_questionnaire(id: &str) -> Result<Box<dyn Questionnaire>, InstrumentError> {
    let id: QuestionnaireId = id.parse()?;
    get_questionnaire(id).ok_or(InstrumentError::Unregistered(id))
}

/// Link ids to present to the patient, in order, for every administered
/// questionnaire. Items shared between questionnaires appear once.
///
/// Administration is decided against `scores`, which callers pass as the
/// scores known so far (an empty map before any scoring has happened).
pub fn presentation_order(
    responses: &ResponseSnapshot,
    patient: &PatientContext,
    scores: &ScoreMap,
) -> Vec<&'static str> {
    let ctx = ScoringContext {
        responses,
        patient,
        scores,
    };
    let mut seen = HashSet::new();
    all_questionnaires()
        .iter()
        .filter(|q| q.is_mandatory() || q.is_administered(&ctx))
        .flat_map(|q| q.items().iter().map(|item| item.link_id).collect::<Vec<_>>())
        .filter(|link_id| seen.insert(*link_id))
        .collect()
}
