//! Terminal output for scored results.
//!
//! We keep formatting code in one place so output changes are localized and
//! pinned by the tests below.

use crate::domain::DomainKind;
use crate::error::AppError;
use crate::reasons::ScoredReasons;

/// `<Domain> Score: <score>, Reason Codes: ['<reason>', ...]`
pub fn format_line(kind: DomainKind, result: &ScoredReasons) -> String {
    format!(
        "{} Score: {}, Reason Codes: {}",
        kind.display_name(),
        result.score,
        fmt_reasons(&result.reasons)
    )
}

/// One JSON object per result, e.g. `{"domain":"credit","score":414,"reasons":[...]}`.
pub fn format_json(result: &ScoredReasons) -> Result<String, AppError> {
    serde_json::to_string(result)
        .map_err(|e| AppError::new(3, format!("Failed to serialize result: {e}")))
}

fn fmt_reasons(reasons: &[String]) -> String {
    let quoted: Vec<String> = reasons.iter().map(|r| quote(r)).collect();
    format!("[{}]", quoted.join(", "))
}

// Single quotes unless the text itself has one, then double quotes.
fn quote(s: &str) -> String {
    if s.contains('\'') && !s.contains('"') {
        format!("\"{s}\"")
    } else {
        format!("'{}'", s.replace('\'', "\\'"))
    }
}
