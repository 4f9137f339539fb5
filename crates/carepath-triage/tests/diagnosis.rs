mod common;

use std::collections::HashSet;

use carepath_core::models::acuity::AcuityCategory;
use carepath_core::models::disposition::{DiagnosisId, DispositionFlag, DispositionOutcomeCare};
use carepath_core::models::patient::{BiologicalSex, PatientContext};
use carepath_core::models::questionnaire::{QuestionnaireId, ScoreMap};
use carepath_core::models::response::ResponseSnapshot;
use carepath_instruments::answers::{MORE_THAN_HALF_THE_DAYS, NO, NOT_AT_ALL};
use carepath_instruments::items;
use carepath_triage::Assessment;
use carepath_triage::diagnosis::{
    DIAGNOSIS_RULES, ResolutionSource, RuleContext, disposition_for, first_matching_rule,
};
use common::Answers;
use pretty_assertions::assert_eq;

fn summarize(responses: ResponseSnapshot) -> carepath_triage::TriageSummary {
    Assessment::new(responses, PatientContext::default()).summary()
}

fn diagnose(responses: ResponseSnapshot) -> DiagnosisId {
    summarize(responses).diagnosis
}

#[test]
fn plan_with_intent_is_crisis_care() {
    let summary = summarize(
        Answers::new()
            .yes(&items::CSSRS_PLAN)
            .yes(&items::CSSRS_INTENT)
            .build(),
    );
    assert!(summary.is_crisis);
    assert_eq!(summary.diagnosis, DiagnosisId::CrisisCare);
    assert_eq!(summary.care_level, DispositionOutcomeCare::Ic);
    assert_eq!(summary.flag, DispositionFlag::NeedsInitialSafetyPlanning);
}

#[test]
fn nothing_elevated_is_self_directed() {
    let summary = summarize(Answers::new().phq9_total(0).gad7_total(0).build());
    assert!(!summary.is_crisis);
    assert_eq!(summary.diagnosis, DiagnosisId::SelfDirected);
    assert_eq!(summary.care_level, DispositionOutcomeCare::SubClinical);
    assert_eq!(summary.flag, DispositionFlag::OptionalReferral);
    assert_eq!(summary.overall_acuity, Some(AcuityCategory::Low));
}

#[test]
fn two_selections_collapse_to_combined_care() {
    let assessment = Assessment::new(
        Answers::new()
            .checked(&items::DX_ADHD)
            .checked(&items::DX_EATING_DISORDER)
            .build(),
        PatientContext::default(),
    );
    let resolution = assessment.resolution();
    assert_eq!(
        resolution.diagnosis,
        DiagnosisId::PsychotherapyWithMedicationManagement
    );
    assert_eq!(resolution.source, ResolutionSource::ExplicitSelection);
}

#[test]
fn single_selection_maps_directly() {
    let cases = [
        (&items::DX_EATING_DISORDER, DiagnosisId::EatingDisorder),
        (&items::DX_ADHD, DiagnosisId::Adhd),
        (&items::DX_SUBSTANCE_USE, DiagnosisId::SubstanceUseDisorder),
        (
            &items::DX_SCHIZOPHRENIA,
            DiagnosisId::PsychotherapyWithMedicationManagement,
        ),
        (
            &items::DX_BIPOLAR,
            DiagnosisId::PsychotherapyWithMedicationManagement,
        ),
        (&items::DX_PTSD, DiagnosisId::Trauma),
    ];
    for (checkbox, expected) in cases {
        assert_eq!(
            diagnose(Answers::new().checked(checkbox).build()),
            expected,
            "{}",
            checkbox.link_id
        );
    }
}

#[test]
fn other_selection_needs_text() {
    let blank = Answers::new()
        .checked(&items::DX_OTHER)
        .text(&items::DX_OTHER_TEXT, "   ")
        .build();
    assert_eq!(diagnose(blank), DiagnosisId::SelfDirected);

    let described = Answers::new()
        .checked(&items::DX_OTHER)
        .text(&items::DX_OTHER_TEXT, "hoarding")
        .build();
    assert_eq!(diagnose(described), DiagnosisId::Evaluation);
}

#[test]
fn crisis_outranks_explicit_selection() {
    let responses = Answers::new()
        .checked(&items::DX_ADHD)
        .yes(&items::CSSRS_LIFETIME_IDEATION)
        .build();
    let resolution = Assessment::new(responses, PatientContext::default()).resolution();
    assert_eq!(resolution.diagnosis, DiagnosisId::CrisisCare);
    assert_eq!(resolution.source, ResolutionSource::Crisis);
}

fn ptsd5_high() -> Answers {
    Answers::new()
        .yes(&items::CONCERN_PTSD)
        .yes(&items::PTSD5_NIGHTMARES)
        .yes(&items::PTSD5_AVOIDANCE)
        .yes(&items::PTSD5_ON_GUARD)
        .yes(&items::PTSD5_NUMB)
}

#[test]
fn trauma_outranks_general_care() {
    let general_only = Answers::new().phq9_total(6).build();
    assert_eq!(diagnose(general_only), DiagnosisId::GeneralCare);

    let both = ptsd5_high().phq9_total(6).build();
    let resolution = Assessment::new(both, PatientContext::default()).resolution();
    assert_eq!(resolution.diagnosis, DiagnosisId::Trauma);
    assert_eq!(resolution.source, ResolutionSource::Rule { priority: 40 });
}

#[test]
fn moderate_ptsd_screen_needs_evaluation() {
    let responses = Answers::new()
        .yes(&items::CONCERN_PTSD)
        .yes(&items::PTSD5_NIGHTMARES)
        .yes(&items::PTSD5_AVOIDANCE)
        .yes(&items::PTSD5_ON_GUARD)
        .build();
    let summary = summarize(responses);
    assert_eq!(summary.diagnosis, DiagnosisId::Evaluation);
    assert_eq!(summary.care_level, DispositionOutcomeCare::Specialty);
    assert_eq!(summary.flag, DispositionFlag::NeedsFurtherAssessment);
}

#[test]
fn elevated_mania_screen_needs_evaluation() {
    let responses = Answers::new()
        .coded(&items::ASRM_HAPPINESS, "asrm-2")
        .coded(&items::ASRM_CONFIDENCE, "asrm-2")
        .coded(&items::ASRM_SLEEP, "asrm-2")
        .build();
    assert_eq!(diagnose(responses), DiagnosisId::Evaluation);
}

fn dast10_high() -> Answers {
    Answers::new()
        .yes(&items::CONCERN_DRUG)
        .yes(&items::DAST10_NON_MEDICAL)
        .yes(&items::DAST10_MULTIPLE)
        .coded(&items::DAST10_ABLE_TO_STOP, NO)
        .yes(&items::DAST10_BLACKOUTS)
        .yes(&items::DAST10_GUILT)
        .yes(&items::DAST10_WITHDRAWAL)
}

#[test]
fn positive_opioid_screen_with_high_dast_is_opioid_use_disorder() {
    let responses = dast10_high().yes(&items::OPIOID_NON_PRESCRIBED).build();
    assert_eq!(diagnose(responses), DiagnosisId::OpioidUseDisorder);
}

#[test]
fn high_dast_alone_is_substance_use_disorder() {
    let responses = dast10_high().coded(&items::OPIOID_NON_PRESCRIBED, NO).build();
    let summary = summarize(responses);
    assert_eq!(summary.diagnosis, DiagnosisId::SubstanceUseDisorder);
    assert_eq!(summary.flag, DispositionFlag::CoordinateReferral);
}

#[test]
fn audit_c_of_six_is_alcohol_use_disorder() {
    let responses = Answers::new()
        .yes(&items::CONCERN_ALCOHOL)
        .coded(&items::AUDIT_C_FREQUENCY, "LA18929-2")
        .coded(&items::AUDIT_C_TYPICAL_DRINKS, "LA18930-0")
        .coded(&items::AUDIT_C_BINGE, "LA6270-8")
        .build();
    let summary = Assessment::new(responses, PatientContext::new(BiologicalSex::Male)).summary();
    assert_eq!(summary.diagnosis, DiagnosisId::AlcoholUseDisorder);
    assert_eq!(summary.care_level, DispositionOutcomeCare::Ic);
}

#[test]
fn moderate_depression_is_combined_care() {
    let summary = summarize(Answers::new().phq9_total(10).build());
    assert_eq!(
        summary.diagnosis,
        DiagnosisId::PsychotherapyWithMedicationManagement
    );
    assert_eq!(summary.overall_acuity, Some(AcuityCategory::Medium));
}

#[test]
fn moderate_anxiety_is_combined_care() {
    let summary = summarize(Answers::new().phq9_total(0).gad7_total(12).build());
    assert_eq!(
        summary.diagnosis,
        DiagnosisId::PsychotherapyWithMedicationManagement
    );
}

#[test]
fn mild_symptoms_with_insomnia_is_insomnia() {
    // PHQ-9 total 5 with trouble sleeping, so the ISI is administered.
    let responses = Answers::new()
        .coded(&items::PHQ9_INTEREST, "LA6571-9")
        .coded(&items::PHQ9_SLEEP, MORE_THAN_HALF_THE_DAYS)
        .coded(&items::PHQ9_SELF_HARM, NOT_AT_ALL)
        .coded(&items::ISI_FALLING_ASLEEP, "isi-moderate")
        .coded(&items::ISI_STAYING_ASLEEP, "isi-moderate")
        .coded(&items::ISI_WAKING_EARLY, "isi-moderate")
        .coded(&items::ISI_SATISFACTION, "isi-moderately-satisfied")
        .build();
    let summary = summarize(responses);
    assert_eq!(summary.diagnosis, DiagnosisId::Insomnia);
    assert_eq!(summary.care_level, DispositionOutcomeCare::SelfDirected);
    assert_eq!(summary.flag, DispositionFlag::NeedsResources);
}

#[test]
fn severe_insomnia_with_mild_symptoms_is_general_care() {
    let responses = Answers::new()
        .coded(&items::PHQ9_INTEREST, "LA6571-9")
        .coded(&items::PHQ9_SLEEP, MORE_THAN_HALF_THE_DAYS)
        .coded(&items::PHQ9_SELF_HARM, NOT_AT_ALL)
        .coded(&items::ISI_FALLING_ASLEEP, "isi-very-severe")
        .coded(&items::ISI_STAYING_ASLEEP, "isi-very-severe")
        .coded(&items::ISI_WAKING_EARLY, "isi-very-severe")
        .coded(&items::ISI_SATISFACTION, "isi-very-dissatisfied")
        .build();
    let assessment = Assessment::new(responses, PatientContext::default());
    assert_eq!(
        assessment.scores()[&QuestionnaireId::Isi].acuity,
        Some(AcuityCategory::High)
    );
    let summary = assessment.summary();
    assert_eq!(summary.diagnosis, DiagnosisId::GeneralCare);
    assert_eq!(summary.care_level, DispositionOutcomeCare::Ic);
}

#[test]
fn high_mania_screen_skips_the_evaluation_tier() {
    let responses = Answers::new()
        .coded(&items::ASRM_HAPPINESS, "asrm-3")
        .coded(&items::ASRM_CONFIDENCE, "asrm-3")
        .coded(&items::ASRM_SLEEP, "asrm-3")
        .coded(&items::ASRM_SPEECH, "asrm-3")
        .coded(&items::ASRM_ACTIVITY, "asrm-3")
        .build();
    let summary = summarize(responses);
    assert_eq!(
        summary.scores[&QuestionnaireId::Asrm].acuity,
        Some(AcuityCategory::High)
    );
    assert_ne!(summary.diagnosis, DiagnosisId::Evaluation);
    assert_eq!(summary.diagnosis, DiagnosisId::SelfDirected);
}

#[test]
fn mild_symptoms_with_grief_is_grief() {
    let responses = Answers::new()
        .phq9_total(5)
        .checked(&items::SYMPTOM_GRIEF)
        .build();
    assert_eq!(diagnose(responses), DiagnosisId::Grief);
}

#[test]
fn grief_without_symptoms_is_self_directed() {
    let responses = Answers::new()
        .phq9_total(2)
        .checked(&items::SYMPTOM_GRIEF)
        .build();
    assert_eq!(diagnose(responses), DiagnosisId::SelfDirected);
}

#[test]
fn rule_priorities_increase_in_declaration_order() {
    for pair in DIAGNOSIS_RULES.windows(2) {
        assert!(
            pair[0].priority < pair[1].priority,
            "{:?} must run before {:?}",
            pair[0].diagnosis,
            pair[1].diagnosis
        );
    }
    assert_eq!(DIAGNOSIS_RULES[0].diagnosis, DiagnosisId::CrisisCare);
}

#[test]
fn each_diagnosis_has_exactly_one_rule() {
    let diagnoses: HashSet<DiagnosisId> = DIAGNOSIS_RULES.iter().map(|r| r.diagnosis).collect();
    assert_eq!(diagnoses.len(), DIAGNOSIS_RULES.len());
}

#[test]
fn final_rule_is_an_unconditional_catch_all() {
    let responses = ResponseSnapshot::new();
    let scores = ScoreMap::new();
    let ctx = RuleContext {
        responses: &responses,
        scores: &scores,
        is_crisis: false,
        selections: &[],
    };
    let last = &DIAGNOSIS_RULES[DIAGNOSIS_RULES.len() - 1];
    assert!((last.applies)(&ctx));
    assert_eq!(last.diagnosis, DiagnosisId::SelfDirected);
    assert_eq!(first_matching_rule(&ctx).diagnosis, DiagnosisId::SelfDirected);
}

#[test]
fn specialty_capacity_rule_never_applies() {
    let responses = Answers::new().yes(&items::CSSRS_PLAN).build();
    let scores = ScoreMap::new();
    let ctx = RuleContext {
        responses: &responses,
        scores: &scores,
        is_crisis: true,
        selections: &[],
    };
    let rule = DIAGNOSIS_RULES
        .iter()
        .find(|r| r.diagnosis == DiagnosisId::SpecialtyCare)
        .unwrap();
    assert!(!(rule.applies)(&ctx));
}

#[test]
fn rule_outcomes_match_the_disposition_table() {
    for rule in &DIAGNOSIS_RULES {
        assert_eq!((rule.care_level(), rule.flag()), disposition_for(rule.diagnosis));
    }
    assert_eq!(
        disposition_for(DiagnosisId::CrisisCare),
        (
            DispositionOutcomeCare::Ic,
            DispositionFlag::NeedsInitialSafetyPlanning
        )
    );
}

#[test]
fn plan_without_intent_is_not_crisis() {
    let responses = Answers::new()
        .yes(&items::CSSRS_PLAN)
        .coded(&items::CSSRS_INTENT, NO)
        .build();
    let summary = summarize(responses);
    assert!(!summary.is_crisis);
    assert_ne!(summary.diagnosis, DiagnosisId::CrisisCare);
}
