//! Coded answer values and the ordinal weight each one carries.
//!
//! Frequency, yes/no, and AUDIT-C codes are LOINC answer codes. Instruments
//! without published answer codes use local codes.

use carepath_core::models::response::{ResponseSnapshot, ResponseValue};

pub const YES: &str = "LA33-6";
pub const NO: &str = "LA32-8";

pub const NOT_AT_ALL: &str = "LA6568-5";
pub const SEVERAL_DAYS: &str = "LA6569-3";
pub const MORE_THAN_HALF_THE_DAYS: &str = "LA6570-1";
pub const NEARLY_EVERY_DAY: &str = "LA6571-9";

/// PHQ/GAD "over the last 2 weeks" frequency scale.
pub const FREQUENCY: &[(&str, i64)] = &[
    (NOT_AT_ALL, 0),
    (SEVERAL_DAYS, 1),
    (MORE_THAN_HALF_THE_DAYS, 2),
    (NEARLY_EVERY_DAY, 3),
];

pub const YES_NO: &[(&str, i64)] = &[(YES, 1), (NO, 0)];

/// DAST-10 item 3 is scored in reverse: answering "no" adds a point.
pub const YES_NO_REVERSED: &[(&str, i64)] = &[(YES, 0), (NO, 1)];

pub const AUDIT_C_FREQUENCY: &[(&str, i64)] = &[
    ("LA6270-8", 0),
    ("LA18926-8", 1),
    ("LA18927-6", 2),
    ("LA18928-4", 3),
    ("LA18929-2", 4),
];

pub const AUDIT_C_TYPICAL_DRINKS: &[(&str, i64)] = &[
    ("LA15694-5", 0),
    ("LA15695-2", 1),
    ("LA18930-0", 2),
    ("LA18931-8", 3),
    ("LA18932-6", 4),
];

pub const AUDIT_C_BINGE_FREQUENCY: &[(&str, i64)] = &[
    ("LA6270-8", 0),
    ("LA18933-4", 1),
    ("LA18876-5", 2),
    ("LA18891-4", 3),
    ("LA18934-2", 4),
];

pub const ISI_SEVERITY: &[(&str, i64)] = &[
    ("isi-none", 0),
    ("isi-mild", 1),
    ("isi-moderate", 2),
    ("isi-severe", 3),
    ("isi-very-severe", 4),
];

pub const ISI_SATISFACTION: &[(&str, i64)] = &[
    ("isi-very-satisfied", 0),
    ("isi-satisfied", 1),
    ("isi-moderately-satisfied", 2),
    ("isi-dissatisfied", 3),
    ("isi-very-dissatisfied", 4),
];

pub const ISI_EXTENT: &[(&str, i64)] = &[
    ("isi-not-at-all", 0),
    ("isi-a-little", 1),
    ("isi-somewhat", 2),
    ("isi-much", 3),
    ("isi-very-much", 4),
];

/// ASRM statements are ranked 0 (absent) to 4 (present nearly constantly).
pub const ASRM_STATEMENT: &[(&str, i64)] = &[
    ("asrm-0", 0),
    ("asrm-1", 1),
    ("asrm-2", 2),
    ("asrm-3", 3),
    ("asrm-4", 4),
];

pub const PRIME_AGREEMENT: &[(&str, i64)] = &[
    ("prime-definitely-disagree", 0),
    ("prime-somewhat-disagree", 1),
    ("prime-slightly-disagree", 2),
    ("prime-not-sure", 3),
    ("prime-slightly-agree", 4),
    ("prime-somewhat-agree", 5),
    ("prime-definitely-agree", 6),
];

/// Ordinal weight of `code` on `scale`, if the code belongs to it.
pub fn weight_of(scale: &[(&str, i64)], code: &str) -> Option<i64> {
    scale.iter().find(|(c, _)| *c == code).map(|(_, w)| *w)
}

/// True only when `link_id` has exactly one answer and it is "yes".
///
/// Boolean answers count as well; any other code, or a missing or
/// ambiguous answer, is false.
pub fn is_yes(responses: &ResponseSnapshot, link_id: &str) -> bool {
    match responses.single(link_id) {
        Some(ResponseValue::Coded { code }) => code == YES,
        Some(ResponseValue::Boolean { value }) => *value,
        _ => false,
    }
}

/// True when `link_id` has exactly one answer and that answer is anything
/// other than `code`.
pub fn answered_other_than(responses: &ResponseSnapshot, link_id: &str, code: &str) -> bool {
    match responses.single(link_id) {
        Some(ResponseValue::Coded { code: answered }) => answered != code,
        Some(_) => true,
        None => false,
    }
}
