use carepath_core::models::questionnaire::QuestionnaireId;

use crate::items;
use crate::scoring::{CutPoints, InstrumentItem, ScoringStrategy};
use crate::{Questionnaire, ScoringContext};

/// DAST-10: Drug Abuse Screening Test, ten yes/no items. Item 3 is
/// reverse scored. Total 0–10. 0–2 LOW, 3–5 MEDIUM, 6+ HIGH.
pub struct Dast10;

impl Questionnaire for Dast10 {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::Dast10
    }

    fn name(&self) -> &str {
        "DAST-10"
    }

    fn is_clinical(&self) -> bool {
        true
    }

    fn items(&self) -> &[&'static InstrumentItem] {
        static ITEMS: [&InstrumentItem; 10] = [
            &items::DAST10_NON_MEDICAL,
            &items::DAST10_MULTIPLE,
            &items::DAST10_ABLE_TO_STOP,
            &items::DAST10_BLACKOUTS,
            &items::DAST10_GUILT,
            &items::DAST10_COMPLAINTS,
            &items::DAST10_NEGLECT,
            &items::DAST10_ILLEGAL,
            &items::DAST10_WITHDRAWAL,
            &items::DAST10_MEDICAL,
        ];
        &ITEMS
    }

    fn strategy(&self) -> Option<ScoringStrategy> {
        Some(ScoringStrategy::SumOfOrdinals {
            cut_points: Some(CutPoints::new(2, 5).into()),
        })
    }

    fn is_administered(&self, ctx: &ScoringContext<'_>) -> bool {
        ctx.answered_yes(&items::CONCERN_DRUG)
    }
}
