//! Shared domain types.
//!
//! Tables are built once at startup and passed by reference into the resolver;
//! only `Score` is serialized, as part of the JSON report.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

/// A model score.
///
/// Credit scores are whole numbers; fraud scores are probabilities. Both are
/// compared against range bounds as `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Score {
    Integer(i64),
    Real(f64),
}

impl Score {
    pub fn value(self) -> f64 {
        match self {
            Score::Integer(v) => v as f64,
            Score::Real(v) => v,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Score::Integer(v) => write!(f, "{v}"),
            Score::Real(v) => fmt_real(f, v),
        }
    }
}

/// Shortest round-trip digits, switching to `1.5e-05` style outside
/// `[1e-4, 1e16)` and keeping `.0` on whole values.
fn fmt_real(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if !v.is_finite() {
        return write!(f, "{v}");
    }
    let magnitude = v.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{v:e}");
        let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);
        let sign = if exponent < 0 { '-' } else { '+' };
        return write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    }
    if v.fract() == 0.0 {
        write!(f, "{v:.1}")
    } else {
        write!(f, "{v}")
    }
}

/// Half-open interval `[low, high)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRange {
    pub low: f64,
    pub high: f64,
}

impl ScoreRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Lower bound inclusive, upper bound exclusive.
    pub fn contains(&self, score: f64) -> bool {
        self.low <= score && score < self.high
    }

    pub fn overlaps(&self, other: &ScoreRange) -> bool {
        self.low < other.high && other.low < self.high
    }
}

impl fmt::Display for ScoreRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.low, self.high)
    }
}

/// One row of a range table: an interval and the codes it explains with.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeEntry {
    pub range: ScoreRange,
    pub codes: Vec<String>,
}

/// Ordered list of range entries.
///
/// Entries are tested in the order they were added; when two ranges overlap the
/// earlier one wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeTable {
    entries: Vec<RangeEntry>,
}

impl RangeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry; builder style so catalogs read top to bottom.
    pub fn with_range<I, S>(mut self, low: f64, high: f64, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(ScoreRange::new(low, high), codes);
        self
    }

    pub fn push<I, S>(&mut self, range: ScoreRange, codes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.push(RangeEntry {
            range,
            codes: codes.into_iter().map(Into::into).collect(),
        });
    }

    pub fn entries(&self) -> &[RangeEntry] {
        &self.entries
    }

    /// Index pairs `(i, j)` with `i < j` whose ranges overlap.
    ///
    /// Overlaps are tolerated at resolve time (first entry wins); this exists so
    /// callers can report them.
    pub fn overlapping_pairs(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for (i, a) in self.entries.iter().enumerate() {
            for (j, b) in self.entries.iter().enumerate().skip(i + 1) {
                if a.range.overlaps(&b.range) {
                    out.push((i, j));
                }
            }
        }
        out
    }
}

/// Code identifier -> human-readable explanation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplanationTable {
    entries: HashMap<String, String>,
}

impl ExplanationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, code: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(code, text);
        self
    }

    pub fn insert(&mut self, code: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(code.into(), text.into());
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }
}

/// A named range table paired with its explanation table.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    pub name: String,
    pub ranges: RangeTable,
    pub explanations: ExplanationTable,
}

impl Domain {
    pub fn new(name: impl Into<String>, ranges: RangeTable, explanations: ExplanationTable) -> Self {
        Self {
            name: name.into(),
            ranges,
            explanations,
        }
    }
}

/// Built-in scoring domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum DomainKind {
    Credit,
    Fraud,
}

impl DomainKind {
    pub const ALL: [DomainKind; 2] = [DomainKind::Credit, DomainKind::Fraud];

    pub fn key(self) -> &'static str {
        match self {
            DomainKind::Credit => "credit",
            DomainKind::Fraud => "fraud",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            DomainKind::Credit => "Credit",
            DomainKind::Fraud => "Fraud",
        }
    }
}

/// Opaque model input. The mock models never look inside.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRecord {
    pub fields: BTreeMap<String, String>,
}
