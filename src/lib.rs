// Spendscope: energy expense analysis for company financial records
//
// This is the library root. Each module corresponds to a stage of the
// pipeline: extract tables, count term frequencies, classify expenses,
// analyze energy ratios, and report.

pub mod analysis;
pub mod classify;
pub mod config;
pub mod data;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod terms;
