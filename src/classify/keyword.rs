// Keyword-stem classifier.
//
// Runs locally with no model and no network. Each label carries a list of
// stems; the label with the most stem hits in the description wins. Ties go
// to the label listed first. Labels without a built-in stem list match on
// their own words.

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use super::labels::{keywords_for, WHOLE_WORD_MAX_LEN};
use super::traits::{Classification, ExpenseClassifier};

/// Local classifier backed by keyword stems.
#[derive(Debug, Default, Clone)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous core shared by the trait methods.
    pub fn classify_sync(&self, description: &str, labels: &[String]) -> Result<Classification> {
        if labels.is_empty() {
            anyhow::bail!("Cannot classify {description:?}: the label set is empty");
        }

        let lowered = description.to_lowercase();
        let words = tokenize(&lowered);

        let hits: Vec<usize> = labels
            .iter()
            .map(|label| {
                let stems = label_stems(label);
                stems.iter().filter(|stem| stem_matches(stem, &lowered, &words)).count()
            })
            .collect();

        let total: usize = hits.iter().sum();
        if total == 0 {
            debug!(description, "No keyword matched, leaving uncategorized");
            return Ok(Classification::uncategorized());
        }

        // max_by_key keeps the last maximum; walk in reverse so ties go to the first label
        let (best, &best_hits) = hits
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|(_, &h)| h)
            .unwrap_or((0, &0));

        Ok(Classification {
            label: labels[best].clone(),
            score: best_hits as f64 / total as f64,
        })
    }
}

#[async_trait]
impl ExpenseClassifier for KeywordClassifier {
    async fn classify(&self, description: &str, labels: &[String]) -> Result<Classification> {
        self.classify_sync(description, labels)
    }
}

/// Built-in stems for known labels, otherwise the label's own words.
fn label_stems(label: &str) -> Vec<String> {
    let builtin = keywords_for(label);
    if !builtin.is_empty() {
        return builtin.iter().map(|s| s.to_string()).collect();
    }
    tokenize(&label.to_lowercase())
        .into_iter()
        .filter(|w| w.chars().count() >= 3)
        .collect()
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

fn stem_matches(stem: &str, lowered: &str, words: &[String]) -> bool {
    if stem.contains(' ') {
        lowered.contains(stem)
    } else if stem.chars().count() <= WHOLE_WORD_MAX_LEN {
        words.iter().any(|w| w == stem)
    } else {
        words.iter().any(|w| w.starts_with(stem))
    }
}
