//! Reason code resolution.
//!
//! - `resolver`: first-match lookup of a score in an ordered range table
//! - `generator`: pairs a model with a domain to score and explain in one call

pub mod generator;
pub mod resolver;

pub use generator::*;
pub use resolver::*;
