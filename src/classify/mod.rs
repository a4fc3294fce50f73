// Expense classification: trait-based abstraction for swappable classifiers.
//
// ExpenseClassifier maps a free-text description plus a label set to the
// single best label. KeywordClassifier runs locally with no setup;
// ZeroShotClassifier calls a hosted zero-shot NLI model.

pub mod keyword;
pub mod labels;
pub mod rate_limiter;
pub mod traits;
pub mod zero_shot;
