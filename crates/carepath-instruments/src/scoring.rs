use carepath_core::models::acuity::AcuityCategory;
use carepath_core::models::patient::PatientContext;
use carepath_core::models::questionnaire::QuestionnaireScore;
use carepath_core::models::response::{ResponseSnapshot, ResponseValue};
use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

use crate::answers;

/// The kind of answer a question accepts.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnswerScale {
    /// Coded answers, each with an ordinal weight.
    Coded { options: &'static [(&'static str, i64)] },
    /// A numeric rating within an inclusive range.
    Numeric { range: NumericRange },
    /// A checkbox.
    Boolean,
    /// Free text. Never scored.
    Text,
}

/// Inclusive bounds for a numeric rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct NumericRange {
    pub min: i64,
    pub max: i64,
}

impl NumericRange {
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// A question in the shared item pool.
#[derive(Debug, Serialize)]
pub struct InstrumentItem {
    pub link_id: &'static str,
    pub text: &'static str,
    pub scale: AnswerScale,
}

impl InstrumentItem {
    /// Ordinal weight of the single recorded answer, if it can be scored.
    pub fn weight(&self, responses: &ResponseSnapshot) -> Option<i64> {
        match (self.scale, responses.single(self.link_id)?) {
            (AnswerScale::Coded { options }, ResponseValue::Coded { code }) => {
                answers::weight_of(options, code)
            }
            (AnswerScale::Numeric { range }, ResponseValue::Numeric { value }) => {
                range.contains(*value).then_some(*value)
            }
            (AnswerScale::Boolean, ResponseValue::Boolean { value }) => Some(i64::from(*value)),
            _ => None,
        }
    }

    /// Check every recorded answer for this item against its scale.
    pub fn validate(&self, responses: &ResponseSnapshot) -> Option<ValidationError> {
        let values = responses.all(self.link_id);
        if values.len() > 1 {
            return Some(ValidationError {
                link_id: self.link_id.to_string(),
                message: format!("{}: {} answers recorded, expected one", self.link_id, values.len()),
            });
        }
        let value = values.first()?;
        let message = match (self.scale, value) {
            (AnswerScale::Coded { options }, ResponseValue::Coded { code })
                if answers::weight_of(options, code).is_none() =>
            {
                format!("{}: unrecognized answer code '{code}'", self.link_id)
            }
            (AnswerScale::Numeric { range }, ResponseValue::Numeric { value })
                if !range.contains(*value) =>
            {
                format!(
                    "{}: value {value} is outside range [{}, {}]",
                    self.link_id, range.min, range.max
                )
            }
            (AnswerScale::Coded { .. }, ResponseValue::Coded { .. })
            | (AnswerScale::Numeric { .. }, ResponseValue::Numeric { .. })
            | (AnswerScale::Boolean, ResponseValue::Boolean { .. })
            | (AnswerScale::Text, ResponseValue::Text { .. }) => return None,
            (scale, value) => format!(
                "{}: answer {value:?} does not match expected {scale:?}",
                self.link_id
            ),
        };
        Some(ValidationError {
            link_id: self.link_id.to_string(),
            message,
        })
    }
}

/// Inclusive upper bounds for the LOW and MEDIUM bands.
///
/// A score at or below `low_max` is LOW, at or below `medium_max` is MEDIUM,
/// anything above is HIGH. With no `medium_max` the classifier is binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CutPoints {
    pub low_max: i64,
    pub medium_max: Option<i64>,
}

impl CutPoints {
    pub const fn new(low_max: i64, medium_max: i64) -> Self {
        Self {
            low_max,
            medium_max: Some(medium_max),
        }
    }

    pub const fn single(low_max: i64) -> Self {
        Self {
            low_max,
            medium_max: None,
        }
    }

    pub fn classify(&self, score: i64) -> AcuityCategory {
        if score <= self.low_max {
            AcuityCategory::Low
        } else if self.medium_max.is_some_and(|max| score <= max) {
            AcuityCategory::Medium
        } else {
            AcuityCategory::High
        }
    }
}

/// Cut points that may differ by patient population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CutPointsBy {
    Uniform { cut_points: CutPoints },
    Population { male: CutPoints, other: CutPoints },
}

impl CutPointsBy {
    pub fn for_patient(&self, patient: &PatientContext) -> CutPoints {
        match *self {
            CutPointsBy::Uniform { cut_points } => cut_points,
            CutPointsBy::Population { male, other } => {
                if patient.is_male() {
                    male
                } else {
                    other
                }
            }
        }
    }
}

impl From<CutPoints> for CutPointsBy {
    fn from(cut_points: CutPoints) -> Self {
        CutPointsBy::Uniform { cut_points }
    }
}

/// How an instrument turns its item answers into a score.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScoringStrategy {
    /// Sum of item weights. Without cut points the score carries no acuity.
    SumOfOrdinals { cut_points: Option<CutPointsBy> },
    /// Number of items answered "yes".
    CountOfYes { cut_points: Option<CutPoints> },
    /// MEDIUM when any single item reaches `item_cut` or the sum reaches
    /// `sum_cut`; HIGH when both do.
    MaxAndSum { item_cut: i64, sum_cut: i64 },
    /// Forces HIGH when `link_id` is answered with anything but `safe_code`,
    /// otherwise defers to `inner`.
    SafetyOverride {
        link_id: &'static str,
        safe_code: &'static str,
        inner: Box<ScoringStrategy>,
    },
}

impl ScoringStrategy {
    pub fn score(
        &self,
        items: &[&InstrumentItem],
        responses: &ResponseSnapshot,
        patient: &PatientContext,
    ) -> QuestionnaireScore {
        match self {
            ScoringStrategy::SumOfOrdinals { cut_points } => {
                let sum = sum_of_ordinals(items, responses);
                match cut_points {
                    Some(cuts) => {
                        QuestionnaireScore::classified(sum, cuts.for_patient(patient).classify(sum))
                    }
                    None => QuestionnaireScore::tracked(sum),
                }
            }
            ScoringStrategy::CountOfYes { cut_points } => {
                let count = count_of_yes(items, responses);
                match cut_points {
                    Some(cuts) => QuestionnaireScore::classified(count, cuts.classify(count)),
                    None => QuestionnaireScore::tracked(count),
                }
            }
            ScoringStrategy::MaxAndSum { item_cut, sum_cut } => {
                let sum = sum_of_ordinals(items, responses);
                let max = max_of_ordinals(items, responses).unwrap_or(0);
                let acuity = match (max >= *item_cut, sum >= *sum_cut) {
                    (true, true) => AcuityCategory::High,
                    (true, false) | (false, true) => AcuityCategory::Medium,
                    (false, false) => AcuityCategory::Low,
                };
                QuestionnaireScore::classified(sum, acuity)
            }
            ScoringStrategy::SafetyOverride {
                link_id,
                safe_code,
                inner,
            } => {
                let base = inner.score(items, responses, patient);
                if answers::answered_other_than(responses, link_id, safe_code) {
                    QuestionnaireScore::classified(base.score, AcuityCategory::High)
                } else {
                    base
                }
            }
        }
    }
}

/// Missing, ambiguous, and unrecognized answers contribute nothing.
pub fn sum_of_ordinals(items: &[&InstrumentItem], responses: &ResponseSnapshot) -> i64 {
    items.iter().filter_map(|item| item.weight(responses)).sum()
}

pub fn max_of_ordinals(items: &[&InstrumentItem], responses: &ResponseSnapshot) -> Option<i64> {
    items.iter().filter_map(|item| item.weight(responses)).max()
}

pub fn count_of_yes(items: &[&InstrumentItem], responses: &ResponseSnapshot) -> i64 {
    items
        .iter()
        .filter(|item| answers::is_yes(responses, item.link_id))
        .count() as i64
}

#[derive(Debug, Clone, Serialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub link_id: String,
    pub message: String,
}
