//! Applies every administered questionnaire's scoring strategy to a
//! response snapshot.

use std::collections::btree_map::Entry;

use carepath_core::models::patient::PatientContext;
use carepath_core::models::questionnaire::ScoreMap;
use carepath_core::models::response::ResponseSnapshot;

use crate::{Questionnaire, ScoringContext, all_questionnaires};

/// Score every questionnaire that is clinical and administered, plus any
/// mandatory questionnaire.
///
/// Administration predicates see only the scores of questionnaires earlier
/// in the catalog. A questionnaire none of whose items has an answer counts
/// as not administered. Questionnaires that were not administered, or that
/// are informational, are absent from the result.
///
/// # Panics
///
/// Panics if two catalog entries share an id.
pub fn score_all(responses: &ResponseSnapshot, patient: &PatientContext) -> ScoreMap {
    score_with(&all_questionnaires(), responses, patient)
}

pub fn score_with(
    catalog: &[Box<dyn Questionnaire>],
    responses: &ResponseSnapshot,
    patient: &PatientContext,
) -> ScoreMap {
    let mut scores = ScoreMap::new();
    for questionnaire in catalog {
        let ctx = ScoringContext {
            responses,
            patient,
            scores: &scores,
        };
        let included = questionnaire.is_mandatory()
            || (questionnaire.is_clinical()
                && questionnaire.is_administered(&ctx)
                && questionnaire.has_answers(responses));
        if !included {
            tracing::trace!(questionnaire = %questionnaire.id(), "not administered");
            continue;
        }
        let Some(score) = questionnaire.score(&ctx) else {
            continue;
        };
        tracing::debug!(
            questionnaire = %questionnaire.id(),
            score = score.score,
            acuity = ?score.acuity,
            "scored questionnaire"
        );
        match scores.entry(questionnaire.id()) {
            Entry::Vacant(slot) => {
                slot.insert(score);
            }
            Entry::Occupied(existing) => panic!(
                "questionnaire {} scored twice; catalog ids must be unique",
                existing.key()
            ),
        }
    }
    scores
}
