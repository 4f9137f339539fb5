//! carepath-cli library root.
//!
//! Exposes the config, logging, and file-backed repository modules so that
//! integration tests can exercise them without going through the binary.

pub mod config;
pub mod logging;
pub mod repository;
