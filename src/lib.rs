//! `reason-codes` library crate.
//!
//! Scores from (mock) models are explained by looking them up in ordered tables
//! of half-open ranges, each mapped to a list of reason codes.
//!
//! The binary (`reasons`) is a thin wrapper around this library so the lookup
//! and the models are testable without spawning processes.

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod models;
pub mod reasons;
pub mod report;
pub mod telemetry;
