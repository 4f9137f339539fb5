use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Severity classification for a single instrument or a whole assessment.
///
/// Variants are declared in ascending order so the derived `Ord` gives
/// `Low < Medium < High`, which the overall-acuity reduction relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AcuityCategory {
    Low,
    Medium,
    High,
}

impl AcuityCategory {
    pub fn is_elevated(self) -> bool {
        self > AcuityCategory::Low
    }
}
