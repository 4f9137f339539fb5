use carepath_core::models::questionnaire::QuestionnaireId;

use crate::answers;
use crate::items;
use crate::scoring::{CutPoints, InstrumentItem, ScoringStrategy};
use crate::{Questionnaire, ScoringContext};

/// ISI: Insomnia Severity Index, seven items rated 0–4. Total 0–28.
/// 0–7 LOW, 8–14 MEDIUM (subthreshold), 15+ HIGH.
/// Administered only when the PHQ-9 sleep item reports any trouble sleeping.
pub struct Isi;

impl Questionnaire for Isi {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::Isi
    }

    fn name(&self) -> &str {
        "ISI"
    }

    fn is_clinical(&self) -> bool {
        true
    }

    fn items(&self) -> &[&'static InstrumentItem] {
        static ITEMS: [&InstrumentItem; 7] = [
            &items::ISI_FALLING_ASLEEP,
            &items::ISI_STAYING_ASLEEP,
            &items::ISI_WAKING_EARLY,
            &items::ISI_SATISFACTION,
            &items::ISI_NOTICEABLE,
            &items::ISI_WORRIED,
            &items::ISI_INTERFERENCE,
        ];
        &ITEMS
    }

    fn strategy(&self) -> Option<ScoringStrategy> {
        Some(ScoringStrategy::SumOfOrdinals {
            cut_points: Some(CutPoints::new(7, 14).into()),
        })
    }

    fn is_administered(&self, ctx: &ScoringContext<'_>) -> bool {
        answers::answered_other_than(ctx.responses, items::PHQ9_SLEEP.link_id, answers::NOT_AT_ALL)
    }
}
