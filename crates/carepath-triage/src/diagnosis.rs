//! Diagnosis resolution.
//!
//! Resolution runs in three steps: a crisis always wins, then explicit
//! diagnosis selections, then the rule chain in priority order. The last
//! rule in the chain always applies, so resolution is total.

use carepath_core::models::acuity::AcuityCategory;
use carepath_core::models::disposition::{DiagnosisId, DispositionFlag, DispositionOutcomeCare};
use carepath_core::models::questionnaire::{QuestionnaireId, ScoreMap};
use carepath_core::models::response::ResponseSnapshot;
use carepath_instruments::items;
use carepath_instruments::questionnaires::opioid_screen::OpioidScreen;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::selection::{SelectedDiagnosis, resolve_selection};

/// PHQ-9 or GAD-7 total at which mild symptoms warrant general care.
pub const GENERAL_CARE_MIN_SCORE: i64 = 5;

/// AUDIT-C total at which alcohol use disorder is indicated.
pub const ALCOHOL_USE_MIN_SCORE: i64 = 6;

/// Everything a rule predicate may inspect.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub responses: &'a ResponseSnapshot,
    pub scores: &'a ScoreMap,
    pub is_crisis: bool,
    pub selections: &'a [SelectedDiagnosis],
}

impl RuleContext<'_> {
    pub fn acuity(&self, id: QuestionnaireId) -> Option<AcuityCategory> {
        self.scores.get(&id).and_then(|score| score.acuity)
    }

    pub fn score(&self, id: QuestionnaireId) -> Option<i64> {
        self.scores.get(&id).map(|score| score.score)
    }

    pub fn selected(&self, selection: SelectedDiagnosis) -> bool {
        self.selections.contains(&selection)
    }

    fn elevated(&self, id: QuestionnaireId) -> bool {
        self.acuity(id).is_some_and(AcuityCategory::is_elevated)
    }

    /// Mild depression or anxiety symptoms.
    pub fn meets_general_care_criteria(&self) -> bool {
        [QuestionnaireId::Phq9, QuestionnaireId::Gad7]
            .into_iter()
            .any(|id| self.score(id).is_some_and(|s| s >= GENERAL_CARE_MIN_SCORE))
    }
}

/// One entry in the rule chain.
#[derive(Debug)]
pub struct DiagnosisRule {
    /// Lower runs first. Must increase with declaration order.
    pub priority: u32,
    pub diagnosis: DiagnosisId,
    pub applies: fn(&RuleContext<'_>) -> bool,
}

impl DiagnosisRule {
    pub fn care_level(&self) -> DispositionOutcomeCare {
        disposition_for(self.diagnosis).0
    }

    pub fn flag(&self) -> DispositionFlag {
        disposition_for(self.diagnosis).1
    }
}

/// The fixed care level and workflow flag for each diagnosis.
pub fn disposition_for(diagnosis: DiagnosisId) -> (DispositionOutcomeCare, DispositionFlag) {
    use DispositionFlag as F;
    use DispositionOutcomeCare as C;
    match diagnosis {
        DiagnosisId::CrisisCare => (C::Ic, F::NeedsInitialSafetyPlanning),
        DiagnosisId::SpecialtyCare => (C::Specialty, F::CoordinateReferral),
        DiagnosisId::EatingDisorder => (C::Specialty, F::NeedsSpecialtyResources),
        DiagnosisId::Trauma => (C::Specialty, F::NeedsSpecialtyResources),
        DiagnosisId::Adhd => (C::Specialty, F::NeedsSpecialtyResources),
        DiagnosisId::Evaluation => (C::Specialty, F::NeedsFurtherAssessment),
        DiagnosisId::OpioidUseDisorder => (C::Specialty, F::CoordinateReferral),
        DiagnosisId::SubstanceUseDisorder => (C::Specialty, F::CoordinateReferral),
        DiagnosisId::AlcoholUseDisorder => (C::Ic, F::NeedsResources),
        DiagnosisId::PsychotherapyWithMedicationManagement => (C::Ic, F::NeedsResources),
        DiagnosisId::Insomnia => (C::SelfDirected, F::NeedsResources),
        DiagnosisId::Grief => (C::SelfDirected, F::NeedsResources),
        DiagnosisId::GeneralCare => (C::Ic, F::NeedsResources),
        DiagnosisId::SelfDirected => (C::SubClinical, F::OptionalReferral),
    }
}

fn crisis(ctx: &RuleContext<'_>) -> bool {
    ctx.is_crisis
}

// Needs a specialty-capacity signal that is not yet defined clinically.
fn specialty_capacity(_ctx: &RuleContext<'_>) -> bool {
    false
}

fn eating_disorder(ctx: &RuleContext<'_>) -> bool {
    ctx.selected(SelectedDiagnosis::EatingDisorder)
}

fn trauma(ctx: &RuleContext<'_>) -> bool {
    ctx.selected(SelectedDiagnosis::Ptsd)
        || ctx.acuity(QuestionnaireId::Ptsd5) == Some(AcuityCategory::High)
}

fn adhd(ctx: &RuleContext<'_>) -> bool {
    ctx.selected(SelectedDiagnosis::Adhd)
}

// MEDIUM only. HIGH on these screens is not an evaluation trigger.
fn evaluation(ctx: &RuleContext<'_>) -> bool {
    [
        QuestionnaireId::Asrm,
        QuestionnaireId::Prime5,
        QuestionnaireId::Ptsd5,
    ]
    .into_iter()
    .any(|id| ctx.acuity(id) == Some(AcuityCategory::Medium))
}

fn opioid_use(ctx: &RuleContext<'_>) -> bool {
    ctx.score(QuestionnaireId::OpioidScreen)
        .is_some_and(OpioidScreen::is_positive)
        && ctx.acuity(QuestionnaireId::Dast10) == Some(AcuityCategory::High)
}

fn substance_use(ctx: &RuleContext<'_>) -> bool {
    ctx.selected(SelectedDiagnosis::SubstanceUse)
        || ctx.acuity(QuestionnaireId::Dast10) == Some(AcuityCategory::High)
}

fn alcohol_use(ctx: &RuleContext<'_>) -> bool {
    ctx.score(QuestionnaireId::AuditC)
        .is_some_and(|score| score >= ALCOHOL_USE_MIN_SCORE)
}

fn psychotherapy_with_medication_management(ctx: &RuleContext<'_>) -> bool {
    ctx.selected(SelectedDiagnosis::Schizophrenia)
        || ctx.selected(SelectedDiagnosis::Bipolar)
        || ctx.elevated(QuestionnaireId::Phq9)
        || ctx.elevated(QuestionnaireId::Gad7)
}

// Severe insomnia (ISI HIGH) falls through to general care.
fn insomnia(ctx: &RuleContext<'_>) -> bool {
    ctx.meets_general_care_criteria()
        && ctx.acuity(QuestionnaireId::Isi) == Some(AcuityCategory::Medium)
}

fn grief(ctx: &RuleContext<'_>) -> bool {
    ctx.meets_general_care_criteria()
        && ctx.responses.boolean(items::SYMPTOM_GRIEF.link_id) == Some(true)
}

fn general_care(ctx: &RuleContext<'_>) -> bool {
    ctx.meets_general_care_criteria()
}

fn self_directed(_ctx: &RuleContext<'_>) -> bool {
    true
}

/// The rule chain, in priority order. The final rule is the catch-all.
pub static DIAGNOSIS_RULES: [DiagnosisRule; 14] = [
    DiagnosisRule {
        priority: 10,
        diagnosis: DiagnosisId::CrisisCare,
        applies: crisis,
    },
    DiagnosisRule {
        priority: 20,
        diagnosis: DiagnosisId::SpecialtyCare,
        applies: specialty_capacity,
    },
    DiagnosisRule {
        priority: 30,
        diagnosis: DiagnosisId::EatingDisorder,
        applies: eating_disorder,
    },
    DiagnosisRule {
        priority: 40,
        diagnosis: DiagnosisId::Trauma,
        applies: trauma,
    },
    DiagnosisRule {
        priority: 50,
        diagnosis: DiagnosisId::Adhd,
        applies: adhd,
    },
    DiagnosisRule {
        priority: 60,
        diagnosis: DiagnosisId::Evaluation,
        applies: evaluation,
    },
    DiagnosisRule {
        priority: 70,
        diagnosis: DiagnosisId::OpioidUseDisorder,
        applies: opioid_use,
    },
    DiagnosisRule {
        priority: 80,
        diagnosis: DiagnosisId::SubstanceUseDisorder,
        applies: substance_use,
    },
    DiagnosisRule {
        priority: 90,
        diagnosis: DiagnosisId::AlcoholUseDisorder,
        applies: alcohol_use,
    },
    DiagnosisRule {
        priority: 100,
        diagnosis: DiagnosisId::PsychotherapyWithMedicationManagement,
        applies: psychotherapy_with_medication_management,
    },
    DiagnosisRule {
        priority: 110,
        diagnosis: DiagnosisId::Insomnia,
        applies: insomnia,
    },
    DiagnosisRule {
        priority: 120,
        diagnosis: DiagnosisId::Grief,
        applies: grief,
    },
    DiagnosisRule {
        priority: 130,
        diagnosis: DiagnosisId::GeneralCare,
        applies: general_care,
    },
    DiagnosisRule {
        priority: 140,
        diagnosis: DiagnosisId::SelfDirected,
        applies: self_directed,
    },
];

/// How a resolution was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum ResolutionSource {
    Crisis,
    ExplicitSelection,
    Rule { priority: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Resolution {
    pub diagnosis: DiagnosisId,
    pub care_level: DispositionOutcomeCare,
    pub flag: DispositionFlag,
    pub source: ResolutionSource,
}

impl Resolution {
    fn new(diagnosis: DiagnosisId, source: ResolutionSource) -> Self {
        let (care_level, flag) = disposition_for(diagnosis);
        Self {
            diagnosis,
            care_level,
            flag,
            source,
        }
    }
}

/// First rule in the chain whose predicate holds.
///
/// The chain ends in an unconditional rule. If that rule is ever made
/// conditional and nothing matches, the miss is logged as an error and the
/// final rule is still returned so resolution stays total.
pub fn first_matching_rule(ctx: &RuleContext<'_>) -> &'static DiagnosisRule {
    let catch_all = &DIAGNOSIS_RULES[DIAGNOSIS_RULES.len() - 1];
    match DIAGNOSIS_RULES.iter().find(|rule| (rule.applies)(ctx)) {
        Some(rule) => rule,
        None => {
            tracing::error!(
                diagnosis = ?catch_all.diagnosis,
                priority = catch_all.priority,
                "no diagnosis rule matched; the final rule must be unconditional"
            );
            catch_all
        }
    }
}

/// Resolve exactly one diagnosis.
pub fn resolve(ctx: &RuleContext<'_>) -> Resolution {
    if ctx.is_crisis {
        return Resolution::new(DiagnosisId::CrisisCare, ResolutionSource::Crisis);
    }

    if let Some(diagnosis) = resolve_selection(ctx.selections) {
        tracing::debug!(?diagnosis, selections = ?ctx.selections, "resolved from explicit selection");
        return Resolution::new(diagnosis, ResolutionSource::ExplicitSelection);
    }

    let rule = first_matching_rule(ctx);
    tracing::debug!(diagnosis = ?rule.diagnosis, priority = rule.priority, "resolved from rule chain");
    Resolution::new(
        rule.diagnosis,
        ResolutionSource::Rule {
            priority: rule.priority,
        },
    )
}
