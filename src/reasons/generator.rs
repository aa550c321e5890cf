//! Model + domain pairing: score an input, then explain the score.

use rand::RngCore;
use serde::Serialize;

use crate::domain::{Domain, InputRecord, Score};
use crate::models::ScoreModel;

use super::resolver::{ResolveError, resolve_in};

/// One scored and explained prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredReasons {
    pub domain: String,
    pub score: Score,
    pub reasons: Vec<String>,
}

pub struct ReasonGenerator {
    model: Box<dyn ScoreModel>,
    domain: Domain,
}

impl ReasonGenerator {
    pub fn new(model: Box<dyn ScoreModel>, domain: Domain) -> Self {
        Self { model, domain }
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn predict_and_explain(
        &self,
        input: &InputRecord,
        rng: &mut dyn RngCore,
    ) -> Result<ScoredReasons, ResolveError> {
        let score = self.model.predict(input, rng);
        let reasons = resolve_in(score.value(), &self.domain)?;
        tracing::debug!(domain = %self.domain.name, %score, n_reasons = reasons.len(), "explained score");

        Ok(ScoredReasons {
            domain: self.domain.name.clone(),
            score,
            reasons,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainKind, ExplanationTable, RangeTable, catalog};
    use crate::models::{CreditScoringModel, model_for, rng_from_seed};

    struct FixedModel(Score);

    impl ScoreModel for FixedModel {
        fn predict(&self, _input: &InputRecord, _rng: &mut dyn RngCore) -> Score {
            self.0
        }
    }

    #[test]
    fn explains_the_predicted_score() {
        let generator = ReasonGenerator::new(Box::new(FixedModel(Score::Integer(414))), catalog::credit());
        let mut rng = rng_from_seed(0);
        let out = generator
            .predict_and_explain(&InputRecord::default(), &mut rng)
            .unwrap();
        assert_eq!(out.domain, "credit");
        assert_eq!(out.score, Score::Integer(414));
        assert_eq!(out.reasons, ["High risk for credit lending.", "Low credit score."]);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let run = |seed| {
            let generator = ReasonGenerator::new(Box::new(CreditScoringModel), catalog::credit());
            let mut rng = rng_from_seed(seed);
            (0..25)
                .map(|_| {
                    generator
                        .predict_and_explain(&InputRecord::default(), &mut rng)
                        .unwrap()
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn builtin_pairs_never_fail() {
        let mut rng = rng_from_seed(99);
        for kind in DomainKind::ALL {
            let generator = ReasonGenerator::new(model_for(kind), catalog::domain(kind));
            for _ in 0..1_000 {
                let out = generator.predict_and_explain(&InputRecord::default(), &mut rng);
                assert!(out.is_ok(), "{kind:?}: {out:?}");
            }
        }
    }

    #[test]
    fn misconfigured_domain_propagates_error() {
        let domain = Domain::new(
            "broken",
            RangeTable::new().with_range(0.0, 1_000.0, ["nope"]),
            ExplanationTable::new(),
        );
        let generator = ReasonGenerator::new(Box::new(FixedModel(Score::Integer(500))), domain);
        let mut rng = rng_from_seed(0);
        let err = generator
            .predict_and_explain(&InputRecord::default(), &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::MissingExplanation {
                domain: Some("broken".to_string()),
                code: "nope".to_string()
            }
        );
    }
}
