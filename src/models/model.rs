//! Mock scoring models.
//!
//! Each model is a stand-in for a real predictor: it ignores its input and draws
//! a score from the generator it is handed. The generator is always passed in by
//! the caller so runs are reproducible from a seed.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::domain::{DomainKind, InputRecord, Score};

/// Lowest credit score the credit model emits.
pub const CREDIT_SCORE_MIN: i64 = 300;
/// Highest credit score the credit model emits (inclusive).
pub const CREDIT_SCORE_MAX: i64 = 850;

/// Something that turns an input record into a score.
pub trait ScoreModel {
    fn predict(&self, input: &InputRecord, rng: &mut dyn RngCore) -> Score;
}

/// Uniform integer credit score in `[300, 850]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreditScoringModel;

impl ScoreModel for CreditScoringModel {
    fn predict(&self, _input: &InputRecord, rng: &mut dyn RngCore) -> Score {
        Score::Integer(rng.gen_range(CREDIT_SCORE_MIN..=CREDIT_SCORE_MAX))
    }
}

/// Uniform fraud probability in `[0, 1)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FraudDetectionModel;

impl ScoreModel for FraudDetectionModel {
    fn predict(&self, _input: &InputRecord, rng: &mut dyn RngCore) -> Score {
        Score::Real(rng.gen_range(0.0..1.0))
    }
}

pub fn model_for(kind: DomainKind) -> Box<dyn ScoreModel> {
    match kind {
        DomainKind::Credit => Box::new(CreditScoringModel),
        DomainKind::Fraud => Box::new(FraudDetectionModel),
    }
}

pub fn rng_from_seed(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
