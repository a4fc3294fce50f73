use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::classify::{labels, zero_shot};
use crate::terms::{FrequencyThreshold, StopWords, DEFAULT_STOP_WORDS};

/// Which expense classifier to use.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifierBackend {
    /// Local keyword stems (default), no model or network
    Keyword,
    /// Hosted zero-shot NLI model, requires HF_API_TOKEN
    ZeroShot,
}

/// Central configuration loaded from environment variables.
///
/// Secrets come from env vars only. The .env file is loaded automatically
/// at startup via dotenvy.
pub struct Config {
    /// JSON or CSV records to analyze. Synthetic data is generated when unset.
    pub data_path: Option<PathBuf>,
    /// Minimum document frequency for frequent terms (default 0.1)
    pub min_freq: FrequencyThreshold,
    /// Descriptions never counted as terms
    pub stop_words: StopWords,
    pub classifier_backend: ClassifierBackend,
    pub hf_api_token: String,
    pub zero_shot_url: String,
    pub zero_shot_model: String,
    /// Labels whose amounts count as energy costs
    pub energy_labels: Vec<String>,
    /// Where `analyze` writes its markdown report
    pub report_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional; an unparsable threshold is an error
    /// rather than a silent fallback to the default.
    pub fn load() -> Result<Self> {
        let classifier_backend = match env::var("SPENDSCOPE_CLASSIFIER").as_deref() {
            Ok("zero-shot") | Ok("zeroshot") => ClassifierBackend::ZeroShot,
            // "keyword" or unset both default to keyword matching
            _ => ClassifierBackend::Keyword,
        };

        let min_freq = match env::var("SPENDSCOPE_MIN_FREQ") {
            Ok(raw) => raw
                .parse::<FrequencyThreshold>()
                .context("SPENDSCOPE_MIN_FREQ is not a valid threshold")?,
            Err(_) => FrequencyThreshold::default(),
        };

        let stop_words = match env::var("SPENDSCOPE_STOP_WORDS") {
            Ok(raw) => StopWords::new(split_list(&raw)),
            Err(_) => StopWords::new(DEFAULT_STOP_WORDS),
        };

        let energy_labels = env::var("SPENDSCOPE_ENERGY_LABELS")
            .map(|raw| split_list(&raw))
            .unwrap_or_else(|_| labels::energy_classes());

        Ok(Self {
            data_path: env::var("SPENDSCOPE_DATA_PATH").ok().map(PathBuf::from),
            min_freq,
            stop_words,
            classifier_backend,
            hf_api_token: env::var("HF_API_TOKEN").unwrap_or_default(),
            zero_shot_url: env::var("SPENDSCOPE_ZERO_SHOT_URL")
                .unwrap_or_else(|_| zero_shot::DEFAULT_BASE_URL.to_string()),
            zero_shot_model: env::var("SPENDSCOPE_ZERO_SHOT_MODEL")
                .unwrap_or_else(|_| zero_shot::DEFAULT_MODEL.to_string()),
            energy_labels,
            report_path: env::var("SPENDSCOPE_REPORT_PATH")
                .unwrap_or_else(|_| "outputs/energy-report.md".to_string()),
        })
    }

    /// Validate that the chosen classifier backend has what it needs.
    pub fn require_classifier(&self) -> Result<()> {
        match self.classifier_backend {
            ClassifierBackend::Keyword => Ok(()),
            ClassifierBackend::ZeroShot => {
                if self.hf_api_token.is_empty() {
                    anyhow::bail!(
                        "HF_API_TOKEN not set. The zero-shot classifier needs it.\n\
                         Add it to your .env file, or set SPENDSCOPE_CLASSIFIER=keyword\n\
                         to use the local keyword classifier instead."
                    );
                }
                Ok(())
            }
        }
    }
}

/// Split a comma-separated env value, trimming entries and dropping blanks.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list(" energia elettrica, ,carburanti e/o combustibili "),
            vec!["energia elettrica", "carburanti e/o combustibili"]
        );
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_zero_shot_requires_token() {
        let config = Config {
            data_path: None,
            min_freq: FrequencyThreshold::default(),
            stop_words: StopWords::none(),
            classifier_backend: ClassifierBackend::ZeroShot,
            hf_api_token: String::new(),
            zero_shot_url: zero_shot::DEFAULT_BASE_URL.to_string(),
            zero_shot_model: zero_shot::DEFAULT_MODEL.to_string(),
            energy_labels: labels::energy_classes(),
            report_path: String::new(),
        };
        assert!(config.require_classifier().is_err());

        let keyword = Config {
            classifier_backend: ClassifierBackend::Keyword,
            ..config
        };
        assert!(keyword.require_classifier().is_ok());
    }
}
