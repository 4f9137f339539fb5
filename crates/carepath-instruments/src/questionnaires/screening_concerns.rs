use carepath_core::models::questionnaire::QuestionnaireId;

use crate::items;
use crate::scoring::{InstrumentItem, ScoringStrategy};
use crate::Questionnaire;

/// Yes/no concern questions that decide which optional instruments are
/// administered. Informational only.
pub struct ScreeningConcerns;

impl Questionnaire for ScreeningConcerns {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::ScreeningConcerns
    }

    fn name(&self) -> &str {
        "Screening Concerns"
    }

    fn is_clinical(&self) -> bool {
        false
    }

    fn items(&self) -> &[&'static InstrumentItem] {
        static ITEMS: [&InstrumentItem; 4] = [
            &items::CONCERN_PTSD,
            &items::CONCERN_DRUG,
            &items::CONCERN_ALCOHOL,
            &items::CONCERN_PAIN,
        ];
        &ITEMS
    }

    fn strategy(&self) -> Option<ScoringStrategy> {
        None
    }
}
