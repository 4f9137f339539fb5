//! Crisis detection.
//!
//! Any one signal is enough. Signals read raw answers, not scores, so a
//! crisis is detected even when the instrument carrying the answer was
//! not otherwise triage-relevant.

use carepath_core::models::response::ResponseSnapshot;
use carepath_instruments::answers::{self, NOT_AT_ALL};
use carepath_instruments::items;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CrisisSignal {
    /// C-SSRS: ever wished to be dead.
    LifetimeIdeation,
    /// C-SSRS: thoughts of suicide in the past month.
    RecentIdeation,
    /// C-SSRS: both a plan and intent to act.
    PlanWithIntent,
    /// PHQ-9 item 9 answered anything but "not at all".
    SelfHarmThoughts,
}

/// Every crisis signal present in `responses`, in a fixed order.
pub fn crisis_signals(responses: &ResponseSnapshot) -> Vec<CrisisSignal> {
    let mut signals = Vec::new();
    if answers::is_yes(responses, items::CSSRS_LIFETIME_IDEATION.link_id) {
        signals.push(CrisisSignal::LifetimeIdeation);
    }
    if answers::is_yes(responses, items::CSSRS_RECENT_IDEATION.link_id) {
        signals.push(CrisisSignal::RecentIdeation);
    }
    if answers::is_yes(responses, items::CSSRS_PLAN.link_id)
        && answers::is_yes(responses, items::CSSRS_INTENT.link_id)
    {
        signals.push(CrisisSignal::PlanWithIntent);
    }
    if answers::answered_other_than(responses, items::PHQ9_SELF_HARM.link_id, NOT_AT_ALL) {
        signals.push(CrisisSignal::SelfHarmThoughts);
    }
    signals
}

pub fn is_crisis(responses: &ResponseSnapshot) -> bool {
    !crisis_signals(responses).is_empty()
}
