use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Recommended intensity of care, ordered from least to most intensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DispositionOutcomeCare {
    SubClinical,
    SelfDirected,
    /// Integrated care, managed by an MHIC within primary care.
    Ic,
    Specialty,
}

/// Next workflow action emitted alongside a diagnosis. Consumed by the
/// case-management queue and the reminder scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DispositionFlag {
    NeedsInitialSafetyPlanning,
    NeedsResources,
    NeedsSpecialtyResources,
    CoordinateReferral,
    NeedsFurtherAssessment,
    OptionalReferral,
}

/// A resolved diagnosis / care pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DiagnosisId {
    CrisisCare,
    SpecialtyCare,
    EatingDisorder,
    Trauma,
    Adhd,
    Evaluation,
    OpioidUseDisorder,
    SubstanceUseDisorder,
    AlcoholUseDisorder,
    PsychotherapyWithMedicationManagement,
    Insomnia,
    Grief,
    GeneralCare,
    SelfDirected,
}

impl DiagnosisId {
    pub fn display_name(self) -> &'static str {
        match self {
            DiagnosisId::CrisisCare => "Crisis Care",
            DiagnosisId::SpecialtyCare => "Specialty Care",
            DiagnosisId::EatingDisorder => "Eating Disorder",
            DiagnosisId::Trauma => "Trauma",
            DiagnosisId::Adhd => "ADHD",
            DiagnosisId::Evaluation => "Evaluation",
            DiagnosisId::OpioidUseDisorder => "Opioid Use Disorder",
            DiagnosisId::SubstanceUseDisorder => "Substance Use Disorder",
            DiagnosisId::AlcoholUseDisorder => "Alcohol Use Disorder",
            DiagnosisId::PsychotherapyWithMedicationManagement => {
                "Psychotherapy and/or Medication Management"
            }
            DiagnosisId::Insomnia => "Insomnia",
            DiagnosisId::Grief => "Grief",
            DiagnosisId::GeneralCare => "General Care",
            DiagnosisId::SelfDirected => "Self-Directed",
        }
    }
}
