use carepath_core::models::questionnaire::QuestionnaireId;

use crate::items;
use crate::scoring::{InstrumentItem, ScoringStrategy};
use crate::Questionnaire;

/// Checkboxes for diagnoses the patient or clinician already knows about,
/// plus the grief symptom. Read directly by disposition; never scored.
pub struct DiagnosisSelection;

impl Questionnaire for DiagnosisSelection {
    fn id(&self) -> QuestionnaireId {
        QuestionnaireId::DiagnosisSelection
    }

    fn name(&self) -> &str {
        "Diagnosis Selection"
    }

    fn is_clinical(&self) -> bool {
        false
    }

    fn items(&self) -> &[&'static InstrumentItem] {
        static ITEMS: [&InstrumentItem; 9] = [
            &items::DX_EATING_DISORDER,
            &items::DX_ADHD,
            &items::DX_SUBSTANCE_USE,
            &items::DX_SCHIZOPHRENIA,
            &items::DX_BIPOLAR,
            &items::DX_PTSD,
            &items::DX_OTHER,
            &items::DX_OTHER_TEXT,
            &items::SYMPTOM_GRIEF,
        ];
        &ITEMS
    }

    fn strategy(&self) -> Option<ScoringStrategy> {
        None
    }
}
