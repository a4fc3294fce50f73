// Pipeline orchestration: extraction, term frequency, classification, analysis.

pub mod run;

pub use run::{build_corpus, frequent_term_counts, run, PipelineOptions, PipelineReport, TermCount};
