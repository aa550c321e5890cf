//! Score sources.
//!
//! Models sit behind the `ScoreModel` trait so a real predictor can replace the
//! mocks without touching the resolver.

pub mod model;

pub use model::*;
