use carepath_core::models::questionnaire::QuestionnaireId;

use crate::items;
use crate::scoring::{CutPoints, InstrumentItem, ScoringStrategy};
use crate::{Questionnaire, ScoringContext};

/// PC-PTSD-5: Primary Care PTSD Screen, five yes/no items.
/// 0–2 LOW, 3 MEDIUM, 4–5 HIGH.
/// Administered only when the patient reports a trauma concern.
pub struct Ptsd5;

impl Questionnaire for Ptsd5 {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::Ptsd5
    }

    fn name(&self) -> &str {
        "PC-PTSD-5"
    }

    fn is_clinical(&self) -> bool {
        true
    }

    fn items(&self) -> &[&'static InstrumentItem] {
        static ITEMS: [&InstrumentItem; 5] = [
            &items::PTSD5_NIGHTMARES,
            &items::PTSD5_AVOIDANCE,
            &items::PTSD5_ON_GUARD,
            &items::PTSD5_NUMB,
            &items::PTSD5_GUILT,
        ];
        &ITEMS
    }

    fn strategy(&self) -> Option<ScoringStrategy> {
        Some(ScoringStrategy::CountOfYes {
            cut_points: Some(CutPoints::new(2, 3)),
        })
    }

    fn is_administered(&self, ctx: &ScoringContext<'_>) -> bool {
        ctx.answered_yes(&items::CONCERN_PTSD)
    }
}
