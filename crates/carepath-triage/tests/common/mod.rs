#![allow(dead_code)]

use carepath_core::models::response::{ResponseItem, ResponseSnapshot};
use carepath_instruments::answers::{FREQUENCY, NOT_AT_ALL, YES};
use carepath_instruments::items;
use carepath_instruments::scoring::InstrumentItem;

/// Builder for response snapshots in tests.
#[derive(Default)]
pub struct Answers(Vec<ResponseItem>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coded(mut self, item: &InstrumentItem, code: &str) -> Self {
        self.0.push(ResponseItem::coded(item.link_id, code));
        self
    }

    pub fn yes(self, item: &InstrumentItem) -> Self {
        self.coded(item, YES)
    }

    pub fn checked(mut self, item: &InstrumentItem) -> Self {
        self.0.push(ResponseItem::boolean(item.link_id, true));
        self
    }

    pub fn text(mut self, item: &InstrumentItem, text: &str) -> Self {
        self.0.push(ResponseItem::text(item.link_id, text));
        self
    }

    /// Answer `items` in order so their frequency weights sum to `total`,
    /// filling from the front with "nearly every day".
    pub fn frequency_total(mut self, items: &[&InstrumentItem], total: i64) -> Self {
        let mut remaining = total;
        for item in items {
            let weight = remaining.min(3);
            remaining -= weight;
            let code = FREQUENCY
                .iter()
                .find(|(_, w)| *w == weight)
                .map(|(code, _)| *code)
                .unwrap();
            self.0.push(ResponseItem::coded(item.link_id, code));
        }
        assert_eq!(remaining, 0, "total too large for the given items");
        self
    }

    /// PHQ-9 answered with `total` spread over items 1–8 and "not at all"
    /// for the self-harm item.
    pub fn phq9_total(self, total: i64) -> Self {
        self.frequency_total(&PHQ9_WITHOUT_SELF_HARM, total)
            .coded(&items::PHQ9_SELF_HARM, NOT_AT_ALL)
    }

    pub fn gad7_total(self, total: i64) -> Self {
        self.frequency_total(&GAD7, total)
    }

    pub fn build(self) -> ResponseSnapshot {
        self.0.into()
    }
}

pub static PHQ9_WITHOUT_SELF_HARM: [&InstrumentItem; 8] = [
    &items::PHQ9_INTEREST,
    &items::PHQ9_DEPRESSED,
    &items::PHQ9_SLEEP,
    &items::PHQ9_ENERGY,
    &items::PHQ9_APPETITE,
    &items::PHQ9_FAILURE,
    &items::PHQ9_CONCENTRATION,
    &items::PHQ9_PSYCHOMOTOR,
];

pub static GAD7: [&InstrumentItem; 7] = [
    &items::GAD7_NERVOUS,
    &items::GAD7_WORRY_CONTROL,
    &items::GAD7_WORRY_TOO_MUCH,
    &items::GAD7_RELAXING,
    &items::GAD7_RESTLESS,
    &items::GAD7_IRRITABLE,
    &items::GAD7_AFRAID,
];
