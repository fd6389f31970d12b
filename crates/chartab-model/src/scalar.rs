#![deny(unsafe_code)]

use std::cmp::Ordering;
use std::fmt;

/// A single cell value as produced by the decoding boundary.
///
/// `Missing` is the distinguished sentinel for "column absent from this
/// record" (or an explicit null in the source). It participates in grouping
/// as an ordinary key so every row stays accounted for downstream.
#[derive(Debug, Clone)]
pub enum Scalar {
    Text(String),
    Number(f64),
    Bool(bool),
    Missing,
}

impl Scalar {
    /// Returns true for the missing-value sentinel.
    pub fn is_missing(&self) -> bool {
        matches!(self, Scalar::Missing)
    }

    /// Coerces this value to a numeric metric, returning `None` when the
    /// value contributes nothing to a sum.
    ///
    /// Strings follow spreadsheet conventions: the trimmed text is parsed
    /// as a float, falling back to the longest leading numeric prefix
    /// (`"12.5kg"` is 12.5, `"abc"` is nothing). Booleans coerce to 1/0.
    /// NaN never escapes: a literal NaN fails coercion like any other
    /// unparseable value.
    pub fn to_metric(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => (!n.is_nan()).then_some(*n),
            Scalar::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Scalar::Text(s) => parse_metric(s),
            Scalar::Missing => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Scalar::Missing => 0,
            Scalar::Bool(_) => 1,
            Scalar::Number(_) => 2,
            Scalar::Text(_) => 3,
        }
    }
}

/// Parses a string as f64, returning None for invalid or empty strings.
/// Falls back to the longest leading numeric prefix, matching common
/// spreadsheet string-to-number behavior.
pub fn parse_metric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .or_else(|| longest_numeric_prefix(trimmed))
        .filter(|n| !n.is_nan())
}

fn longest_numeric_prefix(value: &str) -> Option<f64> {
    let mut best = None;
    for (idx, _) in value.char_indices().skip(1) {
        if let Ok(n) = value[..idx].parse::<f64>() {
            best = Some(n);
        }
    }
    best
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scalar {}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Scalar::Text(a), Scalar::Text(b)) => a.cmp(b),
            (Scalar::Number(a), Scalar::Number(b)) => a.total_cmp(b),
            (Scalar::Bool(a), Scalar::Bool(b)) => a.cmp(b),
            (Scalar::Missing, Scalar::Missing) => Ordering::Equal,
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Wire rendering of the missing sentinel.
pub const MISSING_KEY: &str = "(missing)";

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            // f64 Display is already the shortest round-trip form
            // ("10", "10.5"), which is what chart labels want.
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Scalar::Missing => f.write_str(MISSING_KEY),
        }
    }
}

// Grouped values only cross the boundary as JSON object keys, so the wire
// form is the stringification.
impl serde::Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
