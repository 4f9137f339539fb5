//! carepath-core
//!
//! Pure domain types for behavioral-health triage: questionnaire responses,
//! patient context, acuity, care levels, and disposition flags.
//! No scoring logic lives here — this is the shared vocabulary of the
//! Carepath system.

pub mod error;
pub mod models;
pub mod repository;
