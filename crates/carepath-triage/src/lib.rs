//! carepath-triage
//!
//! Turns a scored response snapshot into a triage decision: crisis
//! detection, overall acuity, and a single resolved diagnosis with its care
//! level and workflow flag.

pub mod acuity;
pub mod assessment;
pub mod crisis;
pub mod diagnosis;
pub mod error;
pub mod selection;

pub use assessment::{Assessment, TriageSummary};
