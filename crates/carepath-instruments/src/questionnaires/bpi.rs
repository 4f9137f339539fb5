use carepath_core::models::questionnaire::QuestionnaireId;

use crate::items;
use crate::scoring::{InstrumentItem, ScoringStrategy};
use crate::{Questionnaire, ScoringContext};

/// BPI: Brief Pain Inventory severity ratings, four items rated 0–10.
/// Tracked for the care team; not used for triage.
pub struct Bpi;

impl Questionnaire for Bpi {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::Bpi
    }

    fn name(&self) -> &str {
        "BPI"
    }

    fn is_clinical(&self) -> bool {
        true
    }

    fn items(&self) -> &[&'static InstrumentItem] {
        static ITEMS: [&InstrumentItem; 4] = [
            &items::BPI_WORST,
            &items::BPI_LEAST,
            &items::BPI_AVERAGE,
            &items::BPI_NOW,
        ];
        &ITEMS
    }

    fn strategy(&self) -> Option<ScoringStrategy> {
        Some(ScoringStrategy::SumOfOrdinals { cut_points: None })
    }

    fn is_administered(&self, ctx: &ScoringContext<'_>) -> bool {
        ctx.answered_yes(&items::CONCERN_PAIN)
    }
}
