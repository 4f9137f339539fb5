mod common;

use carepath_core::models::response::{ResponseItem, ResponseSnapshot};
use carepath_instruments::answers::{NO, NOT_AT_ALL, SEVERAL_DAYS, YES};
use carepath_instruments::items;
use carepath_triage::crisis::{CrisisSignal, crisis_signals, is_crisis};
use common::Answers;
use pretty_assertions::assert_eq;

#[test]
fn no_answers_is_not_a_crisis() {
    assert!(!is_crisis(&ResponseSnapshot::new()));
}

#[test]
fn lifetime_ideation_alone_is_a_crisis() {
    let responses = Answers::new().yes(&items::CSSRS_LIFETIME_IDEATION).build();
    assert_eq!(crisis_signals(&responses), vec![CrisisSignal::LifetimeIdeation]);
}

#[test]
fn recent_ideation_alone_is_a_crisis() {
    let responses = Answers::new()
        .coded(&items::CSSRS_LIFETIME_IDEATION, NO)
        .yes(&items::CSSRS_RECENT_IDEATION)
        .build();
    assert_eq!(crisis_signals(&responses), vec![CrisisSignal::RecentIdeation]);
}

#[test]
fn plan_needs_intent() {
    let plan_only = Answers::new().yes(&items::CSSRS_PLAN).build();
    assert!(!is_crisis(&plan_only));

    let intent_only = Answers::new().yes(&items::CSSRS_INTENT).build();
    assert!(!is_crisis(&intent_only));

    let both = Answers::new()
        .yes(&items::CSSRS_PLAN)
        .yes(&items::CSSRS_INTENT)
        .build();
    assert_eq!(crisis_signals(&both), vec![CrisisSignal::PlanWithIntent]);
}

#[test]
fn self_harm_item_other_than_not_at_all_is_a_crisis() {
    let none = Answers::new().coded(&items::PHQ9_SELF_HARM, NOT_AT_ALL).build();
    assert!(!is_crisis(&none));

    let some = Answers::new().coded(&items::PHQ9_SELF_HARM, SEVERAL_DAYS).build();
    assert_eq!(crisis_signals(&some), vec![CrisisSignal::SelfHarmThoughts]);
}

#[test]
fn unrecognized_self_harm_answer_counts_as_a_signal() {
    let responses = Answers::new().coded(&items::PHQ9_SELF_HARM, "LA-unknown").build();
    assert!(is_crisis(&responses));
}

#[test]
fn ambiguous_answers_are_not_signals() {
    let responses: ResponseSnapshot = vec![
        ResponseItem::coded(items::CSSRS_LIFETIME_IDEATION.link_id, NO),
        ResponseItem::coded(items::CSSRS_LIFETIME_IDEATION.link_id, YES),
        ResponseItem::coded(items::PHQ9_SELF_HARM.link_id, NOT_AT_ALL),
        ResponseItem::coded(items::PHQ9_SELF_HARM.link_id, SEVERAL_DAYS),
    ]
    .into();
    assert!(!is_crisis(&responses));
}

#[test]
fn signals_are_reported_in_a_fixed_order() {
    let responses = Answers::new()
        .coded(&items::PHQ9_SELF_HARM, SEVERAL_DAYS)
        .yes(&items::CSSRS_INTENT)
        .yes(&items::CSSRS_PLAN)
        .yes(&items::CSSRS_RECENT_IDEATION)
        .yes(&items::CSSRS_LIFETIME_IDEATION)
        .build();
    assert_eq!(
        crisis_signals(&responses),
        vec![
            CrisisSignal::LifetimeIdeation,
            CrisisSignal::RecentIdeation,
            CrisisSignal::PlanWithIntent,
            CrisisSignal::SelfHarmThoughts,
        ]
    );
}
