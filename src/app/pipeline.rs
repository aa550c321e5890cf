//! Shared "score and explain" workflow.
//!
//! Results are handed to a sink as they are produced, so the number of rounds
//! never drives an allocation. The binary prints from the sink; tests collect.

use rand::RngCore;

use crate::domain::{DomainKind, InputRecord, catalog};
use crate::error::AppError;
use crate::models::{model_for, rng_from_seed};
use crate::reasons::{ReasonGenerator, ScoredReasons};

use super::RunConfig;

/// Build generators for the configured domains and run every round with a
/// generator seeded from `config.seed`.
pub fn run_pipeline<F>(config: &RunConfig, sink: F) -> Result<(), AppError>
where
    F: FnMut(DomainKind, ScoredReasons) -> Result<(), AppError>,
{
    let mut rng = rng_from_seed(config.seed);
    run_pipeline_with_rng(config, &mut rng, sink)
}

/// Like `run_pipeline`, with a caller-owned generator. An error from `sink`
/// stops the run and is returned as-is.
pub fn run_pipeline_with_rng<F>(
    config: &RunConfig,
    rng: &mut dyn RngCore,
    mut sink: F,
) -> Result<(), AppError>
where
    F: FnMut(DomainKind, ScoredReasons) -> Result<(), AppError>,
{
    let generators: Vec<(DomainKind, ReasonGenerator)> = config
        .domains
        .iter()
        .map(|&kind| (kind, ReasonGenerator::new(model_for(kind), catalog::domain(kind))))
        .collect();

    for (_, generator) in &generators {
        let domain = generator.domain();
        for (i, j) in domain.ranges.overlapping_pairs() {
            let entries = domain.ranges.entries();
            tracing::warn!(
                domain = %domain.name,
                first = %entries[i].range,
                second = %entries[j].range,
                "overlapping score ranges; the first one wins"
            );
        }
    }

    let input = InputRecord::default();
    for round in 0..config.rounds {
        tracing::debug!(round, "scoring round");
        for (kind, generator) in &generators {
            let scored = generator.predict_and_explain(&input, rng)?;
            sink(*kind, scored)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Score;
    use crate::reasons::FALLBACK_REASON;

    fn config(seed: u64, rounds: usize) -> RunConfig {
        RunConfig {
            seed,
            domains: DomainKind::ALL.to_vec(),
            rounds,
            json: false,
        }
    }

    fn collect(config: &RunConfig) -> Vec<(DomainKind, ScoredReasons)> {
        let mut out = Vec::new();
        run_pipeline(config, |kind, scored| {
            out.push((kind, scored));
            Ok(())
        })
        .unwrap();
        out
    }

    #[test]
    fn default_run_is_credit_then_fraud() {
        let out = collect(&config(42, 1));
        let kinds: Vec<DomainKind> = out.iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, vec![DomainKind::Credit, DomainKind::Fraud]);
        assert!(matches!(out[0].1.score, Score::Integer(_)));
        assert!(matches!(out[1].1.score, Score::Real(_)));
    }

    #[test]
    fn same_seed_same_output() {
        assert_eq!(collect(&config(42, 20)), collect(&config(42, 20)));
    }

    #[test]
    fn reasons_match_score_band() {
        for (kind, r) in &collect(&config(3, 500)) {
            let s = r.score.value();
            let expected: &[&str] = match kind {
                DomainKind::Credit if s < 580.0 => &["High risk for credit lending.", "Low credit score."],
                DomainKind::Credit if s < 850.0 => &["Low risk for credit lending.", "High credit score."],
                DomainKind::Credit => &[FALLBACK_REASON],
                DomainKind::Fraud if s < 0.5 => &["Low risk of fraud.", "Transaction is safe."],
                DomainKind::Fraud => &["High risk of fraud.", "Transaction is risky."],
            };
            assert_eq!(r.reasons, expected, "{kind:?} score {s}");
        }
    }

    #[test]
    fn rounds_multiply_results() {
        assert_eq!(collect(&config(1, 4)).len(), 8);
    }

    #[test]
    fn huge_round_count_streams_without_preallocating() {
        let mut seen = 0usize;
        let err = run_pipeline(&config(42, usize::MAX / 2 + 1), |_, _| {
            seen += 1;
            if seen == 6 {
                return Err(AppError::new(3, "sink closed"));
            }
            Ok(())
        })
        .unwrap_err();
        assert_eq!(seen, 6);
        assert_eq!(err.exit_code(), 3);
    }
}
