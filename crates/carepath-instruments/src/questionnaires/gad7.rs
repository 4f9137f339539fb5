use carepath_core::models::questionnaire::QuestionnaireId;

use crate::items;
use crate::scoring::{CutPoints, InstrumentItem, ScoringStrategy};
use crate::Questionnaire;

/// GAD-7: Generalized Anxiety Disorder scale, seven items rated 0–3.
/// Total 0–21. 0–9 LOW, 10–14 MEDIUM, 15+ HIGH.
pub struct Gad7;

impl Questionnaire for Gad7 {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::Gad7
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn is_clinical(&self) -> bool {
        true
    }

    fn items(&self) -> &[&'static InstrumentItem] {
        static ITEMS: [&InstrumentItem; 7] = [
            &items::GAD7_NERVOUS,
            &items::GAD7_WORRY_CONTROL,
            &items::GAD7_WORRY_TOO_MUCH,
            &items::GAD7_RELAXING,
            &items::GAD7_RESTLESS,
            &items::GAD7_IRRITABLE,
            &items::GAD7_AFRAID,
        ];
        &ITEMS
    }

    fn strategy(&self) -> Option<ScoringStrategy> {
        Some(ScoringStrategy::SumOfOrdinals {
            cut_points: Some(CutPoints::new(9, 14).into()),
        })
    }
}
