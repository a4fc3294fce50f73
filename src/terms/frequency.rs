// Document frequency counting.
//
// Each document contributes at most one count per distinct term, no matter
// how many times the term repeats inside it. Documents with no qualifying
// terms still count toward the corpus size.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::normalize::{StopWords, Term};
use super::threshold::{filter_by_min_frequency, FrequencyError, FrequencyThreshold};

/// One row of the corpus: an identifier plus the raw descriptions extracted
/// from it. Duplicates and blank entries are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub descriptions: Vec<String>,
}

impl Document {
    pub fn new<I, S>(id: impl Into<String>, descriptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            descriptions: descriptions.into_iter().map(Into::into).collect(),
        }
    }

    /// The distinct qualifying terms of this document.
    pub fn terms(&self, stop_words: &StopWords) -> HashSet<Term> {
        self.descriptions
            .iter()
            .filter_map(|raw| stop_words.term(raw))
            .collect()
    }
}

/// Term → number of distinct documents containing it, for one corpus.
///
/// Built once by [`compute_document_frequency`] and never mutated; rebuild it
/// if the corpus changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentFrequencyTable {
    counts: HashMap<Term, usize>,
    total_documents: usize,
}

impl DocumentFrequencyTable {
    /// Number of documents in the corpus the table was built from.
    pub fn total_documents(&self) -> usize {
        self.total_documents
    }

    pub fn counts(&self) -> &HashMap<Term, usize> {
        &self.counts
    }

    /// Document frequency of `term`, or 0 if it never appeared.
    pub fn get(&self, term: &str) -> usize {
        self.counts.get(term.trim()).copied().unwrap_or(0)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Terms at or above `threshold`, most frequent first.
    pub fn frequent_terms(&self, threshold: FrequencyThreshold) -> Result<Vec<Term>, FrequencyError> {
        filter_by_min_frequency(&self.counts, self.total_documents, threshold)
    }

    /// Like [`frequent_terms`](Self::frequent_terms) but paired with counts.
    pub fn frequent_terms_with_counts(
        &self,
        threshold: FrequencyThreshold,
    ) -> Result<Vec<(Term, usize)>, FrequencyError> {
        let terms = self.frequent_terms(threshold)?;
        Ok(terms
            .into_iter()
            .map(|t| {
                let count = self.counts.get(&t).copied().unwrap_or(0);
                (t, count)
            })
            .collect())
    }
}

/// Count, for every qualifying term, how many documents of `corpus` contain it.
pub fn compute_document_frequency(corpus: &[Document], stop_words: &StopWords) -> DocumentFrequencyTable {
    let mut counts: HashMap<Term, usize> = HashMap::new();

    for document in corpus {
        for term in document.terms(stop_words) {
            *counts.entry(term).or_insert(0) += 1;
        }
    }

    DocumentFrequencyTable {
        counts,
        total_documents: corpus.len(),
    }
}
