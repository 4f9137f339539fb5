use carepath_core::models::questionnaire::QuestionnaireId;

use crate::items;
use crate::scoring::{CutPoints, CutPointsBy, InstrumentItem, ScoringStrategy};
use crate::{Questionnaire, ScoringContext};

/// AUDIT-C: Alcohol Use Disorders Identification Test, consumption items.
/// Three items rated 0–4. Total 0–12.
///
/// Thresholds differ by biological sex:
/// male 0–3 LOW, 4–5 MEDIUM, 6+ HIGH; otherwise 0–2 LOW, 3–4 MEDIUM, 5+ HIGH.
pub struct AuditC;

pub const MALE_CUT_POINTS: CutPoints = CutPoints::new(3, 5);
pub const OTHER_CUT_POINTS: CutPoints = CutPoints::new(2, 4);

impl Questionnaire for AuditC {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::AuditC
    }

    fn name(&self) -> &str {
        "AUDIT-C"
    }

    fn is_clinical(&self) -> bool {
        true
    }

    fn items(&self) -> &[&'static InstrumentItem] {
        static ITEMS: [&InstrumentItem; 3] = [
            &items::AUDIT_C_FREQUENCY,
            &items::AUDIT_C_TYPICAL_DRINKS,
            &items::AUDIT_C_BINGE,
        ];
        &ITEMS
    }

    fn strategy(&self) -> Option<ScoringStrategy> {
        Some(ScoringStrategy::SumOfOrdinals {
            cut_points: Some(CutPointsBy::Population {
                male: MALE_CUT_POINTS,
                other: OTHER_CUT_POINTS,
            }),
        })
    }

    fn is_administered(&self, ctx: &ScoringContext<'_>) -> bool {
        ctx.answered_yes(&items::CONCERN_ALCOHOL)
    }
}
