use carepath_core::models::questionnaire::QuestionnaireId;

use crate::items;
use crate::scoring::{InstrumentItem, ScoringStrategy};
use crate::Questionnaire;

/// PHQ-4: the PHQ-2 and GAD-2 items combined. Total 0–12.
/// Tracked for reporting; carries no acuity. Its items are shared with
/// PHQ-9 and GAD-7 and are only presented once.
pub struct Phq4;

impl Questionnaire for Phq4 {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::Phq4
    }

    fn name(&self) -> &str {
        "PHQ-4"
    }

    fn is_clinical(&self) -> bool {
        true
    }

    fn items(&self) -> &[&'static InstrumentItem] {
        static ITEMS: [&InstrumentItem; 4] = [
            &items::PHQ9_INTEREST,
            &items::PHQ9_DEPRESSED,
            &items::GAD7_NERVOUS,
            &items::GAD7_WORRY_CONTROL,
        ];
        &ITEMS
    }

    fn strategy(&self) -> Option<ScoringStrategy> {
        Some(ScoringStrategy::SumOfOrdinals { cut_points: None })
    }
}
