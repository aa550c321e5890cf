//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - scores and half-open score ranges (`Score`, `ScoreRange`)
//! - ordered range tables and explanation tables (`RangeTable`, `ExplanationTable`)
//! - the built-in credit/fraud domains (`catalog`)

pub mod catalog;
pub mod types;

pub use types::*;
