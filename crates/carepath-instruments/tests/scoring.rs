use carepath_core::models::acuity::AcuityCategory;
use carepath_core::models::patient::{BiologicalSex, PatientContext};
use carepath_core::models::questionnaire::{QuestionnaireScore, ScoreMap};
use carepath_core::models::response::{ResponseItem, ResponseSnapshot};
use carepath_instruments::answers::{
    MORE_THAN_HALF_THE_DAYS, NEARLY_EVERY_DAY, NO, NOT_AT_ALL, SEVERAL_DAYS, YES,
};
use carepath_instruments::items;
use carepath_instruments::questionnaires::{audit_c::AuditC, bpi::Bpi, cssrs::Cssrs};
use carepath_instruments::questionnaires::{dast10::Dast10, phq9::Phq9, prime5::Prime5};
use carepath_instruments::scoring::CutPoints;
use carepath_instruments::{Questionnaire, ScoringContext};
use pretty_assertions::assert_eq;

fn coded(answers: &[(&str, &str)]) -> ResponseSnapshot {
    answers
        .iter()
        .map(|(link_id, code)| ResponseItem::coded(*link_id, *code))
        .collect()
}

fn score(q: &dyn Questionnaire, responses: &ResponseSnapshot, patient: PatientContext) -> QuestionnaireScore {
    let scores = ScoreMap::new();
    let ctx = ScoringContext {
        responses,
        patient: &patient,
        scores: &scores,
    };
    q.score(&ctx).expect("questionnaire is scorable")
}

#[test]
fn cut_points_are_inclusive_upper_bounds() {
    let cuts = CutPoints::new(9, 19);
    assert_eq!(cuts.classify(0), AcuityCategory::Low);
    assert_eq!(cuts.classify(9), AcuityCategory::Low);
    assert_eq!(cuts.classify(10), AcuityCategory::Medium);
    assert_eq!(cuts.classify(19), AcuityCategory::Medium);
    assert_eq!(cuts.classify(20), AcuityCategory::High);
}

#[test]
fn single_cut_point_is_binary() {
    let cuts = CutPoints::single(0);
    assert_eq!(cuts.classify(0), AcuityCategory::Low);
    assert_eq!(cuts.classify(1), AcuityCategory::High);
}

#[test]
fn phq9_low_sum_without_self_harm_is_low() {
    let responses = coded(&[
        (items::PHQ9_INTEREST.link_id, SEVERAL_DAYS),
        (items::PHQ9_DEPRESSED.link_id, MORE_THAN_HALF_THE_DAYS),
        (items::PHQ9_SLEEP.link_id, SEVERAL_DAYS),
        (items::PHQ9_ENERGY.link_id, SEVERAL_DAYS),
        (items::PHQ9_SELF_HARM.link_id, NOT_AT_ALL),
    ]);
    assert_eq!(
        score(&Phq9, &responses, PatientContext::default()),
        QuestionnaireScore::classified(5, AcuityCategory::Low)
    );
}

#[test]
fn phq9_self_harm_answer_overrides_threshold() {
    let responses = coded(&[
        (items::PHQ9_INTEREST.link_id, SEVERAL_DAYS),
        (items::PHQ9_DEPRESSED.link_id, MORE_THAN_HALF_THE_DAYS),
        (items::PHQ9_ENERGY.link_id, SEVERAL_DAYS),
        (items::PHQ9_SELF_HARM.link_id, SEVERAL_DAYS),
    ]);
    assert_eq!(
        score(&Phq9, &responses, PatientContext::default()),
        QuestionnaireScore::classified(5, AcuityCategory::High)
    );
}

#[test]
fn phq9_high_total_is_high() {
    let responses: ResponseSnapshot = Phq9
        .items()
        .iter()
        .map(|item| ResponseItem::coded(item.link_id, NEARLY_EVERY_DAY))
        .collect();
    let result = score(&Phq9, &responses, PatientContext::default());
    assert_eq!(result.score, 27);
    assert_eq!(result.acuity, Some(AcuityCategory::High));
}

fn audit_c_sum_of_five() -> ResponseSnapshot {
    coded(&[
        // 2-3 times a week (3), 3 or 4 drinks (1), less than monthly (1)
        (items::AUDIT_C_FREQUENCY.link_id, "LA18928-4"),
        (items::AUDIT_C_TYPICAL_DRINKS.link_id, "LA15695-2"),
        (items::AUDIT_C_BINGE.link_id, "LA18933-4"),
    ])
}

#[test]
fn audit_c_uses_male_cut_points_for_male_patients() {
    let result = score(
        &AuditC,
        &audit_c_sum_of_five(),
        PatientContext::new(BiologicalSex::Male),
    );
    assert_eq!(result, QuestionnaireScore::classified(5, AcuityCategory::Medium));
}

#[test]
fn audit_c_uses_lower_cut_points_otherwise() {
    for sex in [BiologicalSex::Female, BiologicalSex::Other, BiologicalSex::Unknown] {
        let result = score(&AuditC, &audit_c_sum_of_five(), PatientContext::new(sex));
        assert_eq!(result, QuestionnaireScore::classified(5, AcuityCategory::High));
    }
}

#[test]
fn dast10_item_three_is_reverse_scored() {
    let cannot_stop = coded(&[(items::DAST10_ABLE_TO_STOP.link_id, NO)]);
    assert_eq!(score(&Dast10, &cannot_stop, PatientContext::default()).score, 1);

    let can_stop = coded(&[(items::DAST10_ABLE_TO_STOP.link_id, YES)]);
    assert_eq!(score(&Dast10, &can_stop, PatientContext::default()).score, 0);
}

#[test]
fn dast10_six_positive_answers_is_high() {
    let responses = coded(&[
        (items::DAST10_NON_MEDICAL.link_id, YES),
        (items::DAST10_MULTIPLE.link_id, YES),
        (items::DAST10_ABLE_TO_STOP.link_id, NO),
        (items::DAST10_BLACKOUTS.link_id, YES),
        (items::DAST10_GUILT.link_id, YES),
        (items::DAST10_COMPLAINTS.link_id, YES),
    ]);
    assert_eq!(
        score(&Dast10, &responses, PatientContext::default()),
        QuestionnaireScore::classified(6, AcuityCategory::High)
    );
}

#[test]
fn unrecognized_and_ambiguous_answers_contribute_nothing() {
    let mut responses = coded(&[
        (items::PHQ9_INTEREST.link_id, "not-a-code"),
        (items::PHQ9_DEPRESSED.link_id, NEARLY_EVERY_DAY),
        (items::PHQ9_DEPRESSED.link_id, NEARLY_EVERY_DAY),
        (items::PHQ9_SLEEP.link_id, SEVERAL_DAYS),
    ]);
    responses.push(ResponseItem::numeric(items::PHQ9_ENERGY.link_id, 3));
    assert_eq!(score(&Phq9, &responses, PatientContext::default()).score, 1);
}

#[test]
fn prime5_single_strong_item_or_high_sum_is_medium() {
    let one_strong = coded(&[(items::PRIME5_VOICES.link_id, "prime-definitely-agree")]);
    assert_eq!(
        score(&Prime5, &one_strong, PatientContext::default()),
        QuestionnaireScore::classified(6, AcuityCategory::Medium)
    );

    let all_unsure: ResponseSnapshot = Prime5
        .items()
        .iter()
        .map(|item| ResponseItem::coded(item.link_id, "prime-not-sure"))
        .collect();
    assert_eq!(
        score(&Prime5, &all_unsure, PatientContext::default()),
        QuestionnaireScore::classified(15, AcuityCategory::Medium)
    );
}

#[test]
fn prime5_strong_item_and_high_sum_is_high() {
    let mut responses: ResponseSnapshot = Prime5.items()[..4]
        .iter()
        .map(|item| ResponseItem::coded(item.link_id, "prime-not-sure"))
        .collect();
    responses.push(ResponseItem::coded(
        items::PRIME5_VOICES.link_id,
        "prime-definitely-agree",
    ));
    assert_eq!(
        score(&Prime5, &responses, PatientContext::default()),
        QuestionnaireScore::classified(18, AcuityCategory::High)
    );
}

#[test]
fn prime5_mild_answers_are_low() {
    let responses: ResponseSnapshot = Prime5
        .items()
        .iter()
        .map(|item| ResponseItem::coded(item.link_id, "prime-slightly-disagree"))
        .collect();
    assert_eq!(
        score(&Prime5, &responses, PatientContext::default()),
        QuestionnaireScore::classified(10, AcuityCategory::Low)
    );
}

#[test]
fn bpi_sums_numeric_ratings_without_acuity() {
    let responses: ResponseSnapshot = vec![
        ResponseItem::numeric(items::BPI_WORST.link_id, 7),
        ResponseItem::numeric(items::BPI_LEAST.link_id, 2),
        ResponseItem::numeric(items::BPI_AVERAGE.link_id, 5),
        ResponseItem::numeric(items::BPI_NOW.link_id, 4),
    ]
    .into();
    assert_eq!(
        score(&Bpi, &responses, PatientContext::default()),
        QuestionnaireScore::tracked(18)
    );
}

#[test]
fn bpi_ignores_out_of_range_ratings() {
    let responses: ResponseSnapshot = vec![
        ResponseItem::numeric(items::BPI_WORST.link_id, 11),
        ResponseItem::numeric(items::BPI_NOW.link_id, 4),
    ]
    .into();
    assert_eq!(score(&Bpi, &responses, PatientContext::default()).score, 4);
}

#[test]
fn cssrs_counts_coded_and_boolean_yes_answers() {
    let responses: ResponseSnapshot = vec![
        ResponseItem::coded(items::CSSRS_LIFETIME_IDEATION.link_id, YES),
        ResponseItem::boolean(items::CSSRS_RECENT_IDEATION.link_id, true),
        ResponseItem::coded(items::CSSRS_PLAN.link_id, NO),
        ResponseItem::coded(items::CSSRS_INTENT.link_id, "unknown"),
    ]
    .into();
    assert_eq!(
        score(&Cssrs, &responses, PatientContext::default()),
        QuestionnaireScore::classified(2, AcuityCategory::High)
    );
}
