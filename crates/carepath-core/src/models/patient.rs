use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BiologicalSex {
    Male,
    Female,
    Other,
    #[default]
    Unknown,
}

/// Demographic facts needed for population-specific score thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientContext {
    #[serde(default)]
    pub biological_sex: BiologicalSex,
}

impl PatientContext {
    pub fn new(biological_sex: BiologicalSex) -> Self {
        Self { biological_sex }
    }

    pub fn is_male(&self) -> bool {
        self.biological_sex == BiologicalSex::Male
    }
}
