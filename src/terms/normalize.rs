// Term normalization and stop-word handling.
//
// Raw description strings enter the system here. A description becomes a
// Term only after trimming, and only if it is non-empty and not a stop word.
// Matching is exact: no case-folding, no stemming.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Table headers and totals labels that show up in nearly every expense
/// table and carry no signal.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "descrizione",
    "totale",
    "totali",
    "descrizioni",
    "0",
    "1",
    "2",
    "totale calcolato",
];

/// A normalized expense description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Term(String);

impl Term {
    /// Trim a raw description into a term. Returns `None` for blank input.
    ///
    /// Stop words are not checked here; see [`StopWords::term`].
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Term {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Term {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A fixed set of normalized strings that are never counted as terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Build a stop-word set. Entries are trimmed; blank entries are dropped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// An empty set, so every non-blank description qualifies.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Normalize a raw description and reject it if it is a stop word.
    pub fn term(&self, raw: &str) -> Option<Term> {
        Term::parse(raw).filter(|t| !self.contains(t.as_str()))
    }

    /// The stop words for Italian cost tables (headers and totals).
    pub fn italian_cost_tables() -> Self {
        Self::new(DEFAULT_STOP_WORDS)
    }
}
