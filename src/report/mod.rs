//! Reporting utilities: text and JSON rendering of scored results.

pub mod format;

pub use format::*;
