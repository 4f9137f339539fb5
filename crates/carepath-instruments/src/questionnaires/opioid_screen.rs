use carepath_core::models::questionnaire::QuestionnaireId;

use crate::items;
use crate::scoring::{InstrumentItem, ScoringStrategy};
use crate::{Questionnaire, ScoringContext};

/// Two-question opioid misuse screen. Positive when either is "yes".
/// Tracked without acuity; disposition reads the raw count.
pub struct OpioidScreen;

impl OpioidScreen {
    pub fn is_positive(score: i64) -> bool {
        score > 0
    }
}

impl Questionnaire for OpioidScreen {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::OpioidScreen
    }

    fn name(&self) -> &str {
        "Opioid Screen"
    }

    fn is_clinical(&self) -> bool {
        true
    }

    fn items(&self) -> &[&'static InstrumentItem] {
        static ITEMS: [&InstrumentItem; 2] = [
            &items::OPIOID_NON_PRESCRIBED,
            &items::OPIOID_MORE_THAN_PRESCRIBED,
        ];
        &ITEMS
    }

    fn strategy(&self) -> Option<ScoringStrategy> {
        Some(ScoringStrategy::CountOfYes { cut_points: None })
    }

    fn is_administered(&self, ctx: &ScoringContext<'_>) -> bool {
        ctx.answered_yes(&items::CONCERN_DRUG)
    }
}
