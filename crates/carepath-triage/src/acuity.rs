use std::collections::HashSet;
use std::sync::LazyLock;

use carepath_core::models::acuity::AcuityCategory;
use carepath_core::models::questionnaire::{QuestionnaireId, ScoreMap};
use carepath_instruments::all_questionnaires;

static CLINICAL: LazyLock<HashSet<QuestionnaireId>> = LazyLock::new(|| {
    all_questionnaires()
        .iter()
        .filter(|q| q.is_clinical())
        .map(|q| q.id())
        .collect()
});

/// Whether `id` names a clinical questionnaire in the catalog.
pub fn is_clinical(id: QuestionnaireId) -> bool {
    CLINICAL.contains(&id)
}

/// Highest acuity among clinical questionnaires that produced one.
///
/// Mandatory non-clinical screeners do not count. `None` when nothing
/// clinical produced an acuity.
pub fn overall_acuity(scores: &ScoreMap) -> Option<AcuityCategory> {
    scores
        .iter()
        .filter(|(id, _)| is_clinical(**id))
        .filter_map(|(_, score)| score.acuity)
        .max()
}
