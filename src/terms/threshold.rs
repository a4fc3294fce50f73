// Minimum document frequency filtering.
//
// A threshold is either an absolute document count or a proportion of the
// corpus. Proportions must lie strictly between 0.0 and 1.0 and are resolved
// to a count with round-half-up, so 0.25 of 10 documents means 3.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use super::normalize::Term;

/// Errors from threshold validation and parsing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FrequencyError {
    /// A proportional threshold outside the open interval (0.0, 1.0).
    #[error("invalid argument: proportional min_freq must be between 0.0 and 1.0 (exclusive), got {0}")]
    InvalidArgument(f64),

    /// Threshold text that is neither an integer nor a real number.
    #[error("cannot parse frequency threshold {0:?}: expected an integer count or a proportion like 0.1")]
    ParseThreshold(String),
}

/// Minimum document frequency for a term to be kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FrequencyThreshold {
    /// Minimum raw number of documents.
    Absolute(usize),
    /// Minimum share of the corpus, `0.0 < r < 1.0`.
    Proportion(f64),
}

impl Default for FrequencyThreshold {
    /// Terms present in at least 10% of documents.
    fn default() -> Self {
        Self::Proportion(0.1)
    }
}

impl FrequencyThreshold {
    /// Resolve to an absolute document count for a corpus of `total_documents`.
    pub fn resolve(self, total_documents: usize) -> Result<usize, FrequencyError> {
        match self {
            Self::Absolute(count) => Ok(count),
            Self::Proportion(ratio) => {
                // Negated form so NaN is rejected too
                if !(ratio > 0.0 && ratio < 1.0) {
                    return Err(FrequencyError::InvalidArgument(ratio));
                }
                // Snap off float noise first so an exact .5 (50 * 0.29) is not
                // stored as 14.4999... and rounded down
                let product = total_documents as f64 * ratio;
                let product = (product * 1e9).round() / 1e9;
                // f64::round is half-away-from-zero, i.e. half-up for positives
                Ok(product.round() as usize)
            }
        }
    }
}

impl fmt::Display for FrequencyThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(count) => write!(f, "{count} documents"),
            Self::Proportion(ratio) => {
                let percent = format!("{:.2}", ratio * 100.0);
                let percent = percent.trim_end_matches('0').trim_end_matches('.');
                write!(f, "{percent}% of documents")
            }
        }
    }
}

impl FromStr for FrequencyThreshold {
    type Err = FrequencyError;

    /// `"3"` is an absolute count; `"0.25"`, `"1.0"` or `"1e-1"` are
    /// proportions (validated later, at filter time).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || FrequencyError::ParseThreshold(s.to_string());

        if s.contains(['.', 'e', 'E']) {
            s.parse::<f64>().map(Self::Proportion).map_err(|_| err())
        } else {
            s.parse::<usize>().map(Self::Absolute).map_err(|_| err())
        }
    }
}

/// Keep the terms whose document frequency is at least the resolved threshold.
///
/// Results are ordered by descending frequency, then by term. The input map
/// is not modified.
pub fn filter_by_min_frequency(
    counts: &HashMap<Term, usize>,
    total_documents: usize,
    threshold: FrequencyThreshold,
) -> Result<Vec<Term>, FrequencyError> {
    let min_count = threshold.resolve(total_documents)?;

    let mut kept: Vec<(&Term, usize)> = counts
        .iter()
        .filter(|(_, &count)| count >= min_count)
        .map(|(term, &count)| (term, count))
        .collect();
    kept.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    Ok(kept.into_iter().map(|(term, _)| term.clone()).collect())
}
