//! The shared item pool.
//!
//! Every question is defined exactly once here. Instruments reference items
//! from the pool, so a question used by several instruments (the PHQ-2 and
//! GAD-2 items appear in both PHQ-4 and their parent instruments) is shown
//! to the patient once and scored independently by each instrument.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::answers;
use crate::scoring::{AnswerScale, InstrumentItem, NumericRange};

const FREQUENCY: AnswerScale = AnswerScale::Coded {
    options: answers::FREQUENCY,
};
const YES_NO: AnswerScale = AnswerScale::Coded {
    options: answers::YES_NO,
};
const PAIN_RATING: AnswerScale = AnswerScale::Numeric {
    range: NumericRange { min: 0, max: 10 },
};

const fn item(link_id: &'static str, text: &'static str, scale: AnswerScale) -> InstrumentItem {
    InstrumentItem {
        link_id,
        text,
        scale,
    }
}

// Screening concerns: gate the optional instruments.
pub static CONCERN_PTSD: InstrumentItem = item(
    "concern-ptsd",
    "Are you concerned about a traumatic event you experienced?",
    YES_NO,
);
pub static CONCERN_DRUG: InstrumentItem = item(
    "concern-drug",
    "Are you concerned about your drug use?",
    YES_NO,
);
pub static CONCERN_ALCOHOL: InstrumentItem = item(
    "concern-alcohol",
    "Are you concerned about your alcohol use?",
    YES_NO,
);
pub static CONCERN_PAIN: InstrumentItem = item(
    "concern-pain",
    "Are you concerned about chronic pain?",
    YES_NO,
);

// Diagnosis and symptom selection.
pub static DX_EATING_DISORDER: InstrumentItem =
    item("dx-eating-disorder", "Eating disorder", AnswerScale::Boolean);
pub static DX_ADHD: InstrumentItem = item("dx-adhd", "ADHD", AnswerScale::Boolean);
pub static DX_SUBSTANCE_USE: InstrumentItem =
    item("dx-substance-use", "Substance use", AnswerScale::Boolean);
pub static DX_SCHIZOPHRENIA: InstrumentItem =
    item("dx-schizophrenia", "Schizophrenia", AnswerScale::Boolean);
pub static DX_BIPOLAR: InstrumentItem = item("dx-bipolar", "Bipolar disorder", AnswerScale::Boolean);
pub static DX_PTSD: InstrumentItem = item("dx-ptsd", "PTSD", AnswerScale::Boolean);
pub static DX_OTHER: InstrumentItem = item("dx-other", "Other", AnswerScale::Boolean);
pub static DX_OTHER_TEXT: InstrumentItem =
    item("dx-other-text", "Other (please describe)", AnswerScale::Text);
pub static SYMPTOM_GRIEF: InstrumentItem = item(
    "symptom-grief",
    "Grief or the loss of someone close to you",
    AnswerScale::Boolean,
);

// C-SSRS screen.
pub static CSSRS_LIFETIME_IDEATION: InstrumentItem = item(
    "cssrs-lifetime-ideation",
    "Have you ever wished you were dead or wished you could go to sleep and not wake up?",
    YES_NO,
);
pub static CSSRS_RECENT_IDEATION: InstrumentItem = item(
    "cssrs-recent-ideation",
    "In the past month, have you had any actual thoughts of killing yourself?",
    YES_NO,
);
pub static CSSRS_PLAN: InstrumentItem = item(
    "cssrs-plan",
    "Have you started to work out or worked out the details of how to kill yourself?",
    YES_NO,
);
pub static CSSRS_INTENT: InstrumentItem = item(
    "cssrs-intent",
    "Have you had these thoughts and had some intention of acting on them?",
    YES_NO,
);

// PHQ-9. The first two items are the PHQ-2.
pub static PHQ9_INTEREST: InstrumentItem =
    item("44250-9", "Little interest or pleasure in doing things", FREQUENCY);
pub static PHQ9_DEPRESSED: InstrumentItem =
    item("44255-8", "Feeling down, depressed, or hopeless", FREQUENCY);
pub static PHQ9_SLEEP: InstrumentItem = item(
    "44259-0",
    "Trouble falling or staying asleep, or sleeping too much",
    FREQUENCY,
);
pub static PHQ9_ENERGY: InstrumentItem =
    item("44254-1", "Feeling tired or having little energy", FREQUENCY);
pub static PHQ9_APPETITE: InstrumentItem = item("44251-7", "Poor appetite or overeating", FREQUENCY);
pub static PHQ9_FAILURE: InstrumentItem = item(
    "44258-2",
    "Feeling bad about yourself, or that you are a failure",
    FREQUENCY,
);
pub static PHQ9_CONCENTRATION: InstrumentItem =
    item("44252-5", "Trouble concentrating on things", FREQUENCY);
pub static PHQ9_PSYCHOMOTOR: InstrumentItem = item(
    "44253-3",
    "Moving or speaking so slowly that other people could have noticed, or the opposite",
    FREQUENCY,
);
pub static PHQ9_SELF_HARM: InstrumentItem = item(
    "44260-8",
    "Thoughts that you would be better off dead, or of hurting yourself in some way",
    FREQUENCY,
);

// GAD-7. The first two items are the GAD-2.
pub static GAD7_NERVOUS: InstrumentItem =
    item("69725-0", "Feeling nervous, anxious, or on edge", FREQUENCY);
pub static GAD7_WORRY_CONTROL: InstrumentItem =
    item("68509-9", "Not being able to stop or control worrying", FREQUENCY);
pub static GAD7_WORRY_TOO_MUCH: InstrumentItem =
    item("69733-4", "Worrying too much about different things", FREQUENCY);
pub static GAD7_RELAXING: InstrumentItem = item("69734-2", "Trouble relaxing", FREQUENCY);
pub static GAD7_RESTLESS: InstrumentItem =
    item("69735-9", "Being so restless that it is hard to sit still", FREQUENCY);
pub static GAD7_IRRITABLE: InstrumentItem =
    item("69689-8", "Becoming easily annoyed or irritable", FREQUENCY);
pub static GAD7_AFRAID: InstrumentItem = item(
    "69736-7",
    "Feeling afraid, as if something awful might happen",
    FREQUENCY,
);

// ISI.
const ISI_SEVERITY: AnswerScale = AnswerScale::Coded {
    options: answers::ISI_SEVERITY,
};
const ISI_EXTENT: AnswerScale = AnswerScale::Coded {
    options: answers::ISI_EXTENT,
};
pub static ISI_FALLING_ASLEEP: InstrumentItem =
    item("isi-1", "Difficulty falling asleep", ISI_SEVERITY);
pub static ISI_STAYING_ASLEEP: InstrumentItem =
    item("isi-2", "Difficulty staying asleep", ISI_SEVERITY);
pub static ISI_WAKING_EARLY: InstrumentItem =
    item("isi-3", "Problems waking up too early", ISI_SEVERITY);
pub static ISI_SATISFACTION: InstrumentItem = item(
    "isi-4",
    "How satisfied are you with your current sleep pattern?",
    AnswerScale::Coded {
        options: answers::ISI_SATISFACTION,
    },
);
pub static ISI_NOTICEABLE: InstrumentItem = item(
    "isi-5",
    "How noticeable to others is your sleep problem?",
    ISI_EXTENT,
);
pub static ISI_WORRIED: InstrumentItem = item(
    "isi-6",
    "How worried or distressed are you about your sleep problem?",
    ISI_EXTENT,
);
pub static ISI_INTERFERENCE: InstrumentItem = item(
    "isi-7",
    "To what extent does your sleep problem interfere with daily functioning?",
    ISI_EXTENT,
);

// ASRM.
const ASRM_STATEMENT: AnswerScale = AnswerScale::Coded {
    options: answers::ASRM_STATEMENT,
};
pub static ASRM_HAPPINESS: InstrumentItem =
    item("asrm-1", "Feeling happier or more cheerful than usual", ASRM_STATEMENT);
pub static ASRM_CONFIDENCE: InstrumentItem =
    item("asrm-2", "Feeling more self-confident than usual", ASRM_STATEMENT);
pub static ASRM_SLEEP: InstrumentItem =
    item("asrm-3", "Needing less sleep than usual", ASRM_STATEMENT);
pub static ASRM_SPEECH: InstrumentItem =
    item("asrm-4", "Talking more than usual", ASRM_STATEMENT);
pub static ASRM_ACTIVITY: InstrumentItem =
    item("asrm-5", "Being more active than usual", ASRM_STATEMENT);

// PRIME-5.
const PRIME_AGREEMENT: AnswerScale = AnswerScale::Coded {
    options: answers::PRIME_AGREEMENT,
};
pub static PRIME5_UNUSUAL_EVENTS: InstrumentItem = item(
    "prime5-1",
    "I think that I have felt that there are odd or unusual things going on that I can't explain",
    PRIME_AGREEMENT,
);
pub static PRIME5_MIND_READING: InstrumentItem = item(
    "prime5-2",
    "I think that I might be able to predict the future",
    PRIME_AGREEMENT,
);
pub static PRIME5_INTERFERENCE: InstrumentItem = item(
    "prime5-3",
    "I may have felt that there could possibly be something interrupting or controlling my thoughts",
    PRIME_AGREEMENT,
);
pub static PRIME5_SUPERSTITION: InstrumentItem = item(
    "prime5-4",
    "I have had the experience of doing something differently because of my superstitions",
    PRIME_AGREEMENT,
);
pub static PRIME5_VOICES: InstrumentItem = item(
    "prime5-5",
    "I think I might feel like my mind is playing tricks on me",
    PRIME_AGREEMENT,
);

// PC-PTSD-5.
pub static PTSD5_NIGHTMARES: InstrumentItem = item(
    "ptsd5-1",
    "Had nightmares about the event(s) or thought about the event(s) when you did not want to?",
    YES_NO,
);
pub static PTSD5_AVOIDANCE: InstrumentItem = item(
    "ptsd5-2",
    "Tried hard not to think about the event(s) or went out of your way to avoid reminders?",
    YES_NO,
);
pub static PTSD5_ON_GUARD: InstrumentItem = item(
    "ptsd5-3",
    "Been constantly on guard, watchful, or easily startled?",
    YES_NO,
);
pub static PTSD5_NUMB: InstrumentItem = item(
    "ptsd5-4",
    "Felt numb or detached from people, activities, or your surroundings?",
    YES_NO,
);
pub static PTSD5_GUILT: InstrumentItem = item(
    "ptsd5-5",
    "Felt guilty or unable to stop blaming yourself or others for the event(s)?",
    YES_NO,
);

// DAST-10.
pub static DAST10_NON_MEDICAL: InstrumentItem = item(
    "dast10-1",
    "Have you used drugs other than those required for medical reasons?",
    YES_NO,
);
pub static DAST10_MULTIPLE: InstrumentItem = item(
    "dast10-2",
    "Do you abuse more than one drug at a time?",
    YES_NO,
);
pub static DAST10_ABLE_TO_STOP: InstrumentItem = item(
    "dast10-3",
    "Are you always able to stop using drugs when you want to?",
    AnswerScale::Coded {
        options: answers::YES_NO_REVERSED,
    },
);
pub static DAST10_BLACKOUTS: InstrumentItem = item(
    "dast10-4",
    "Have you had blackouts or flashbacks as a result of drug use?",
    YES_NO,
);
pub static DAST10_GUILT: InstrumentItem = item(
    "dast10-5",
    "Do you ever feel bad or guilty about your drug use?",
    YES_NO,
);
pub static DAST10_COMPLAINTS: InstrumentItem = item(
    "dast10-6",
    "Does your spouse (or parents) ever complain about your involvement with drugs?",
    YES_NO,
);
pub static DAST10_NEGLECT: InstrumentItem = item(
    "dast10-7",
    "Have you neglected your family because of your use of drugs?",
    YES_NO,
);
pub static DAST10_ILLEGAL: InstrumentItem = item(
    "dast10-8",
    "Have you engaged in illegal activities in order to obtain drugs?",
    YES_NO,
);
pub static DAST10_WITHDRAWAL: InstrumentItem = item(
    "dast10-9",
    "Have you ever experienced withdrawal symptoms when you stopped taking drugs?",
    YES_NO,
);
pub static DAST10_MEDICAL: InstrumentItem = item(
    "dast10-10",
    "Have you had medical problems as a result of your drug use?",
    YES_NO,
);

// Opioid screen.
pub static OPIOID_NON_PRESCRIBED: InstrumentItem = item(
    "opioid-1",
    "Have you used opioids that were not prescribed to you?",
    YES_NO,
);
pub static OPIOID_MORE_THAN_PRESCRIBED: InstrumentItem = item(
    "opioid-2",
    "Have you used more of a prescribed opioid than directed?",
    YES_NO,
);

// AUDIT-C.
pub static AUDIT_C_FREQUENCY: InstrumentItem = item(
    "68518-0",
    "How often do you have a drink containing alcohol?",
    AnswerScale::Coded {
        options: answers::AUDIT_C_FREQUENCY,
    },
);
pub static AUDIT_C_TYPICAL_DRINKS: InstrumentItem = item(
    "68519-8",
    "How many standard drinks containing alcohol do you have on a typical day?",
    AnswerScale::Coded {
        options: answers::AUDIT_C_TYPICAL_DRINKS,
    },
);
pub static AUDIT_C_BINGE: InstrumentItem = item(
    "68520-6",
    "How often do you have six or more drinks on one occasion?",
    AnswerScale::Coded {
        options: answers::AUDIT_C_BINGE_FREQUENCY,
    },
);

// BPI severity ratings.
pub static BPI_WORST: InstrumentItem =
    item("bpi-worst", "Pain at its worst in the last 24 hours", PAIN_RATING);
pub static BPI_LEAST: InstrumentItem =
    item("bpi-least", "Pain at its least in the last 24 hours", PAIN_RATING);
pub static BPI_AVERAGE: InstrumentItem = item("bpi-average", "Pain on average", PAIN_RATING);
pub static BPI_NOW: InstrumentItem = item("bpi-now", "Pain right now", PAIN_RATING);

/// Every item in the pool, keyed by link id.
pub fn by_link_id(link_id: &str) -> Option<&'static InstrumentItem> {
    static INDEX: LazyLock<HashMap<&'static str, &'static InstrumentItem>> = LazyLock::new(|| {
        crate::all_questionnaires()
            .iter()
            .flat_map(|q| q.items().iter().copied())
            .map(|item| (item.link_id, item))
            .collect()
    });
    INDEX.get(link_id).copied()
}
