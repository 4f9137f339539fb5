use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::acuity::AcuityCategory;
use crate::error::CoreError;

/// Identity of every instrument in the questionnaire catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionnaireId {
    ScreeningConcerns,
    DiagnosisSelection,
    Cssrs,
    Phq4,
    Phq9,
    Gad7,
    Isi,
    Asrm,
    Prime5,
    Ptsd5,
    Dast10,
    OpioidScreen,
    AuditC,
    Bpi,
}

impl QuestionnaireId {
    pub const ALL: [QuestionnaireId; 14] = [
        QuestionnaireId::ScreeningConcerns,
        QuestionnaireId::DiagnosisSelection,
        QuestionnaireId::Cssrs,
        QuestionnaireId::Phq4,
        QuestionnaireId::Phq9,
        QuestionnaireId::Gad7,
        QuestionnaireId::Isi,
        QuestionnaireId::Asrm,
        QuestionnaireId::Prime5,
        QuestionnaireId::Ptsd5,
        QuestionnaireId::Dast10,
        QuestionnaireId::OpioidScreen,
        QuestionnaireId::AuditC,
        QuestionnaireId::Bpi,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionnaireId::ScreeningConcerns => "screening_concerns",
            QuestionnaireId::DiagnosisSelection => "diagnosis_selection",
            QuestionnaireId::Cssrs => "cssrs",
            QuestionnaireId::Phq4 => "phq4",
            QuestionnaireId::Phq9 => "phq9",
            QuestionnaireId::Gad7 => "gad7",
            QuestionnaireId::Isi => "isi",
            QuestionnaireId::Asrm => "asrm",
            QuestionnaireId::Prime5 => "prime5",
            QuestionnaireId::Ptsd5 => "ptsd5",
            QuestionnaireId::Dast10 => "dast10",
            QuestionnaireId::OpioidScreen => "opioid_screen",
            QuestionnaireId::AuditC => "audit_c",
            QuestionnaireId::Bpi => "bpi",
        }
    }
}

impl fmt::Display for QuestionnaireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionnaireId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionnaireId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CoreError::UnknownQuestionnaire(s.to_string()))
    }
}

/// The scored result of one administered instrument.
///
/// `acuity` is `None` for instruments that are tracked but not used for
/// triage (e.g. pain inventories).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionnaireScore {
    pub score: i64,
    pub acuity: Option<AcuityCategory>,
}

impl QuestionnaireScore {
    pub fn tracked(score: i64) -> Self {
        Self { score, acuity: None }
    }

    pub fn classified(score: i64, acuity: AcuityCategory) -> Self {
        Self {
            score,
            acuity: Some(acuity),
        }
    }
}

/// Per-instrument scores keyed by instrument id. Ordered so that serialized
/// summaries are stable.
pub type ScoreMap = BTreeMap<QuestionnaireId, QuestionnaireScore>;
