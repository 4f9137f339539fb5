use carepath_core::models::questionnaire::QuestionnaireId;

use crate::items;
use crate::scoring::{CutPoints, InstrumentItem, ScoringStrategy};
use crate::Questionnaire;

/// C-SSRS screen: Columbia Suicide Severity Rating Scale.
/// Always administered and always scored, because crisis detection reads
/// its items regardless of which other instruments run.
/// Score is the number of "yes" answers: 0 LOW, 1 MEDIUM, 2+ HIGH.
pub struct Cssrs;

impl Questionnaire for Cssrs {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::Cssrs
    }

    fn name(&self) -> &str {
        "C-SSRS"
    }

    fn is_clinical(&self) -> bool {
        false
    }

    fn is_mandatory(&self) -> bool {
        true
    }

    fn items(&self) -> &[&'static InstrumentItem] {
        static ITEMS: [&InstrumentItem; 4] = [
            &items::CSSRS_LIFETIME_IDEATION,
            &items::CSSRS_RECENT_IDEATION,
            &items::CSSRS_PLAN,
            &items::CSSRS_INTENT,
        ];
        &ITEMS
    }

    fn strategy(&self) -> Option<ScoringStrategy> {
        Some(ScoringStrategy::CountOfYes {
            cut_points: Some(CutPoints::new(0, 1)),
        })
    }
}
