// Term frequency filtering: document frequency counting and threshold filtering.

pub mod frequency;
pub mod normalize;
pub mod threshold;

pub use frequency::{compute_document_frequency, Document, DocumentFrequencyTable};
pub use normalize::{StopWords, Term, DEFAULT_STOP_WORDS};
pub use threshold::{filter_by_min_frequency, FrequencyError, FrequencyThreshold};
