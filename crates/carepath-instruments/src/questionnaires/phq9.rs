use carepath_core::models::questionnaire::QuestionnaireId;

use crate::answers;
use crate::items;
use crate::scoring::{CutPoints, InstrumentItem, ScoringStrategy};
use crate::Questionnaire;

/// PHQ-9: Patient Health Questionnaire, nine items rated 0–3. Total 0–27.
/// 0–9 LOW, 10–19 MEDIUM, 20+ HIGH.
///
/// Any answer other than "not at all" on item 9 (thoughts of self-harm)
/// makes the acuity HIGH whatever the total.
pub struct Phq9;

impl Questionnaire for Phq9 {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::Phq9
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn is_clinical(&self) -> bool {
        true
    }

    fn items(&self) -> &[&'static InstrumentItem] {
        static ITEMS: [&InstrumentItem; 9] = [
            &items::PHQ9_INTEREST,
            &items::PHQ9_DEPRESSED,
            &items::PHQ9_SLEEP,
            &items::PHQ9_ENERGY,
            &items::PHQ9_APPETITE,
            &items::PHQ9_FAILURE,
            &items::PHQ9_CONCENTRATION,
            &items::PHQ9_PSYCHOMOTOR,
            &items::PHQ9_SELF_HARM,
        ];
        &ITEMS
    }

    fn strategy(&self) -> Option<ScoringStrategy> {
        Some(ScoringStrategy::SafetyOverride {
            link_id: items::PHQ9_SELF_HARM.link_id,
            safe_code: answers::NOT_AT_ALL,
            inner: Box::new(ScoringStrategy::SumOfOrdinals {
                cut_points: Some(CutPoints::new(9, 19).into()),
            }),
        })
    }
}
