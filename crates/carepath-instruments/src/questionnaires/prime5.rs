use carepath_core::models::questionnaire::QuestionnaireId;

use crate::items;
use crate::scoring::{InstrumentItem, ScoringStrategy};
use crate::Questionnaire;

/// PRIME-5: psychosis-risk screen, five items rated 0–6. Total 0–30.
/// A single "definitely agree" or a total of 15 or more is MEDIUM; both
/// together are HIGH.
pub struct Prime5;

impl Questionnaire for Prime5 {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::Prime5
    }

    fn name(&self) -> &str {
        "PRIME-5"
    }

    fn is_clinical(&self) -> bool {
        true
    }

    fn items(&self) -> &[&'static InstrumentItem] {
        static ITEMS: [&InstrumentItem; 5] = [
            &items::PRIME5_UNUSUAL_EVENTS,
            &items::PRIME5_MIND_READING,
            &items::PRIME5_INTERFERENCE,
            &items::PRIME5_SUPERSTITION,
            &items::PRIME5_VOICES,
        ];
        &ITEMS
    }

    fn strategy(&self) -> Option<ScoringStrategy> {
        Some(ScoringStrategy::MaxAndSum {
            item_cut: 6,
            sum_cut: 15,
        })
    }
}
