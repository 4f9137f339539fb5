use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The value a patient gave for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum ResponseValue {
    /// A coded answer, typically a LOINC answer code such as `LA33-6`.
    Coded { code: String },
    Boolean { value: bool },
    Text { value: String },
    Numeric { value: i64 },
}

/// One answer to one question, keyed by the question's link id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseItem {
    pub link_id: String,
    pub value: ResponseValue,
}

impl ResponseItem {
    pub fn coded(link_id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            link_id: link_id.into(),
            value: ResponseValue::Coded { code: code.into() },
        }
    }

    pub fn boolean(link_id: impl Into<String>, value: bool) -> Self {
        Self {
            link_id: link_id.into(),
            value: ResponseValue::Boolean { value },
        }
    }

    pub fn text(link_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            link_id: link_id.into(),
            value: ResponseValue::Text {
                value: value.into(),
            },
        }
    }

    pub fn numeric(link_id: impl Into<String>, value: i64) -> Self {
        Self {
            link_id: link_id.into(),
            value: ResponseValue::Numeric { value },
        }
    }
}

/// All answers recorded for one assessment, grouped by link id.
///
/// A question may have zero, one, or many answers. Scoring treats exactly
/// one answer as the only valid case; the accessors below return `None`
/// for anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ResponseItem>", into = "Vec<ResponseItem>")]
pub struct ResponseSnapshot {
    by_link_id: BTreeMap<String, Vec<ResponseValue>>,
}

impl ResponseSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ResponseItem) {
        self.by_link_id
            .entry(item.link_id)
            .or_default()
            .push(item.value);
    }

    /// Every answer recorded for `link_id`, in the order received.
    pub fn all(&self, link_id: &str) -> &[ResponseValue] {
        self.by_link_id
            .get(link_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The answer for `link_id` when exactly one exists.
    pub fn single(&self, link_id: &str) -> Option<&ResponseValue> {
        match self.all(link_id) {
            [value] => Some(value),
            _ => None,
        }
    }

    pub fn coded(&self, link_id: &str) -> Option<&str> {
        match self.single(link_id)? {
            ResponseValue::Coded { code } => Some(code),
            _ => None,
        }
    }

    pub fn boolean(&self, link_id: &str) -> Option<bool> {
        match self.single(link_id)? {
            ResponseValue::Boolean { value } => Some(*value),
            _ => None,
        }
    }

    pub fn text(&self, link_id: &str) -> Option<&str> {
        match self.single(link_id)? {
            ResponseValue::Text { value } => Some(value),
            _ => None,
        }
    }

    pub fn numeric(&self, link_id: &str) -> Option<i64> {
        match self.single(link_id)? {
            ResponseValue::Numeric { value } => Some(*value),
            _ => None,
        }
    }

    pub fn link_ids(&self) -> impl Iterator<Item = &str> {
        self.by_link_id.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.by_link_id.is_empty()
    }
}

impl FromIterator<ResponseItem> for ResponseSnapshot {
    fn from_iter<T: IntoIterator<Item = ResponseItem>>(iter: T) -> Self {
        let mut snapshot = ResponseSnapshot::new();
        for item in iter {
            snapshot.push(item);
        }
        snapshot
    }
}

impl From<Vec<ResponseItem>> for ResponseSnapshot {
    fn from(items: Vec<ResponseItem>) -> Self {
        items.into_iter().collect()
    }
}

impl From<ResponseSnapshot> for Vec<ResponseItem> {
    fn from(snapshot: ResponseSnapshot) -> Self {
        snapshot
            .by_link_id
            .into_iter()
            .flat_map(|(link_id, values)| {
                values.into_iter().map(move |value| ResponseItem {
                    link_id: link_id.clone(),
                    value,
                })
            })
            .collect()
    }
}
