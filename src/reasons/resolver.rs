//! Score -> reason explanations lookup.

use std::fmt;

use crate::domain::{Domain, ExplanationTable, RangeTable};

/// Returned (as the only element) when no range contains the score.
pub const FALLBACK_REASON: &str = "No reason code available for this score range.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A matched range references a code with no explanation.
    MissingExplanation { domain: Option<String>, code: String },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::MissingExplanation {
                domain: Some(domain),
                code,
            } => write!(f, "{domain}: no explanation configured for reason code '{code}'"),
            ResolveError::MissingExplanation { domain: None, code } => {
                write!(f, "no explanation configured for reason code '{code}'")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// Resolve the explanations for `score`.
///
/// Entries are tested in table order against `[low, high)`; the first hit wins.
/// Its codes are mapped through `explanations` in list order. A score outside
/// every range yields `[FALLBACK_REASON]`.
pub fn resolve(
    score: f64,
    ranges: &RangeTable,
    explanations: &ExplanationTable,
) -> Result<Vec<String>, ResolveError> {
    let Some(entry) = ranges.entries().iter().find(|e| e.range.contains(score)) else {
        return Ok(vec![FALLBACK_REASON.to_string()]);
    };

    entry
        .codes
        .iter()
        .map(|code| {
            explanations
                .get(code)
                .map(str::to_string)
                .ok_or_else(|| ResolveError::MissingExplanation {
                    domain: None,
                    code: code.clone(),
                })
        })
        .collect()
}

/// `resolve` against a domain's tables, tagging errors with the domain name.
pub fn resolve_in(score: f64, domain: &Domain) -> Result<Vec<String>, ResolveError> {
    resolve(score, &domain.ranges, &domain.explanations).map_err(|err| match err {
        ResolveError::MissingExplanation { code, .. } => ResolveError::MissingExplanation {
            domain: Some(domain.name.clone()),
            code,
        },
    })
}
