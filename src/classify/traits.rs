// Expense classifier trait.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Label used when nothing in the label set matches.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// The best label for one description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    /// Confidence from 0.0 to 1.0. Keyword matching reports the share of
    /// matched keywords that went to the winning label.
    pub score: f64,
}

impl Classification {
    pub fn uncategorized() -> Self {
        Self {
            label: UNCATEGORIZED.to_string(),
            score: 0.0,
        }
    }

    pub fn is_uncategorized(&self) -> bool {
        self.label == UNCATEGORIZED
    }
}

/// Trait for classifying expense descriptions. Async because the hosted
/// zero-shot backend is an HTTP call.
#[async_trait]
pub trait ExpenseClassifier: Send + Sync {
    /// Pick the best of `labels` for `description`.
    async fn classify(&self, description: &str, labels: &[String]) -> Result<Classification>;

    /// Classify several descriptions, returning results in the same order.
    async fn classify_batch(
        &self,
        descriptions: &[String],
        labels: &[String],
    ) -> Result<Vec<Classification>> {
        let mut results = Vec::with_capacity(descriptions.len());
        for description in descriptions {
            results.push(self.classify(description, labels).await?);
        }
        Ok(results)
    }
}
