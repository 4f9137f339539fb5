use carepath_core::models::questionnaire::QuestionnaireId;

use crate::items;
use crate::scoring::{CutPoints, InstrumentItem, ScoringStrategy};
use crate::Questionnaire;

/// ASRM: Altman Self-Rating Mania Scale, five items rated 0–4. Total 0–20.
/// 0–5 LOW, 6–11 MEDIUM, 12+ HIGH.
pub struct Asrm;

impl Questionnaire for Asrm {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::Asrm
    }

    fn name(&self) -> &str {
        "ASRM"
    }

    fn is_clinical(&self) -> bool {
        true
    }

    fn items(&self) -> &[&'static InstrumentItem] {
        static ITEMS: [&InstrumentItem; 5] = [
            &items::ASRM_HAPPINESS,
            &items::ASRM_CONFIDENCE,
            &items::ASRM_SLEEP,
            &items::ASRM_SPEECH,
            &items::ASRM_ACTIVITY,
        ];
        &ITEMS
    }

    fn strategy(&self) -> Option<ScoringStrategy> {
        Some(ScoringStrategy::SumOfOrdinals {
            cut_points: Some(CutPoints::new(5, 11).into()),
        })
    }
}
