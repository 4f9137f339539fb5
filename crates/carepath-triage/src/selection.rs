//! Diagnoses the patient or clinician selected explicitly.

use carepath_core::models::disposition::DiagnosisId;
use carepath_core::models::response::ResponseSnapshot;
use carepath_instruments::items;
use carepath_instruments::scoring::InstrumentItem;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SelectedDiagnosis {
    EatingDisorder,
    Adhd,
    SubstanceUse,
    Schizophrenia,
    Bipolar,
    Ptsd,
    /// "Other", counted only when the accompanying text is not blank.
    Other,
}

impl SelectedDiagnosis {
    fn checkbox(self) -> &'static InstrumentItem {
        match self {
            SelectedDiagnosis::EatingDisorder => &items::DX_EATING_DISORDER,
            SelectedDiagnosis::Adhd => &items::DX_ADHD,
            SelectedDiagnosis::SubstanceUse => &items::DX_SUBSTANCE_USE,
            SelectedDiagnosis::Schizophrenia => &items::DX_SCHIZOPHRENIA,
            SelectedDiagnosis::Bipolar => &items::DX_BIPOLAR,
            SelectedDiagnosis::Ptsd => &items::DX_PTSD,
            SelectedDiagnosis::Other => &items::DX_OTHER,
        }
    }

    /// The diagnosis a lone selection maps to.
    pub fn diagnosis(self) -> DiagnosisId {
        match self {
            SelectedDiagnosis::EatingDisorder => DiagnosisId::EatingDisorder,
            SelectedDiagnosis::Adhd => DiagnosisId::Adhd,
            SelectedDiagnosis::SubstanceUse => DiagnosisId::SubstanceUseDisorder,
            SelectedDiagnosis::Schizophrenia | SelectedDiagnosis::Bipolar => {
                DiagnosisId::PsychotherapyWithMedicationManagement
            }
            SelectedDiagnosis::Ptsd => DiagnosisId::Trauma,
            SelectedDiagnosis::Other => DiagnosisId::Evaluation,
        }
    }
}

const ALL: [SelectedDiagnosis; 7] = [
    SelectedDiagnosis::EatingDisorder,
    SelectedDiagnosis::Adhd,
    SelectedDiagnosis::SubstanceUse,
    SelectedDiagnosis::Schizophrenia,
    SelectedDiagnosis::Bipolar,
    SelectedDiagnosis::Ptsd,
    SelectedDiagnosis::Other,
];

/// Checked diagnosis boxes. Unchecked, missing, and ambiguous answers are
/// not selections.
pub fn selected_diagnoses(responses: &ResponseSnapshot) -> Vec<SelectedDiagnosis> {
    ALL.into_iter()
        .filter(|selection| responses.boolean(selection.checkbox().link_id) == Some(true))
        .filter(|selection| {
            *selection != SelectedDiagnosis::Other
                || responses
                    .text(items::DX_OTHER_TEXT.link_id)
                    .is_some_and(|text| !text.trim().is_empty())
        })
        .collect()
}

/// Resolve explicit selections to a diagnosis.
///
/// No selection defers to the rule chain. More than one collapses to the
/// combined psychotherapy / medication management category rather than
/// picking one of them.
pub fn resolve_selection(selections: &[SelectedDiagnosis]) -> Option<DiagnosisId> {
    match selections {
        [] => None,
        [only] => Some(only.diagnosis()),
        _ => Some(DiagnosisId::PsychotherapyWithMedicationManagement),
    }
}
