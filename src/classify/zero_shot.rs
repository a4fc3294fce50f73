// Hosted zero-shot classification.
//
// Sends the description and candidate labels to a zero-shot NLI model
// served over the Hugging Face inference API. The model scores every label
// and we keep the top one.
//
// Request:  POST {base_url}/{model}  {"inputs": ..., "parameters": {"candidate_labels": [...]}}
// Response: {"sequence": ..., "labels": [...], "scores": [...]}  (sorted by score)

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rate_limiter::RateLimiter;
use super::traits::{Classification, ExpenseClassifier};
use crate::output::truncate_chars;

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_MODEL: &str = "vicgalle/xlm-roberta-large-xnli-anli";

/// Zero-shot classifier backed by a hosted NLI model.
pub struct ZeroShotClassifier {
    client: Client,
    endpoint: String,
    api_token: String,
    rate_limiter: RateLimiter,
}

impl ZeroShotClassifier {
    pub fn new(base_url: &str, model: &str, api_token: String) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/{}", base_url.trim_end_matches('/'), model),
            api_token,
            // Free tier tolerates a handful of requests per second
            rate_limiter: RateLimiter::new(4.0),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ExpenseClassifier for ZeroShotClassifier {
    async fn classify(&self, description: &str, labels: &[String]) -> Result<Classification> {
        if labels.is_empty() {
            anyhow::bail!("Cannot classify {description:?}: the label set is empty");
        }

        self.rate_limiter.acquire().await;

        let request = ZeroShotRequest {
            inputs: description,
            parameters: ZeroShotParameters {
                candidate_labels: labels,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .json(&request)
            .send()
            .await
            .context("Failed to call zero-shot classification endpoint")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Zero-shot endpoint returned {}: {}", status, body);
        }

        let result: ZeroShotResponse = response
            .json()
            .await
            .context("Failed to parse zero-shot classification response")?;

        let classification = top_label(&result)
            .with_context(|| format!("Zero-shot response had no labels for {description:?}"))?;

        debug!(
            label = %classification.label,
            score = classification.score,
            text_preview = %truncate_chars(description, 50),
            "Classified expense"
        );

        Ok(classification)
    }
}

/// Highest-scoring label. The API sorts labels by score, but we do not rely on it.
fn top_label(response: &ZeroShotResponse) -> Option<Classification> {
    response
        .labels
        .iter()
        .zip(response.scores.iter())
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(label, &score)| Classification {
            label: label.clone(),
            score,
        })
}

// --- inference API request/response types ---

#[derive(Serialize)]
struct ZeroShotRequest<'a> {
    inputs: &'a str,
    parameters: ZeroShotParameters<'a>,
}

#[derive(Serialize)]
struct ZeroShotParameters<'a> {
    candidate_labels: &'a [String],
}

#[derive(Deserialize)]
struct ZeroShotResponse {
    labels: Vec<String>,
    scores: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_label_picks_max_score() {
        let response: ZeroShotResponse = serde_json::from_str(
            r#"{"sequence":"Pagamento per energia elettrica",
                "labels":["imposte","energia elettrica","logistica"],
                "scores":[0.2,0.7,0.1]}"#,
        )
        .unwrap();
        let c = top_label(&response).unwrap();
        assert_eq!(c.label, "energia elettrica");
        assert!((c.score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_top_label_empty() {
        let response = ZeroShotResponse {
            labels: vec![],
            scores: vec![],
        };
        assert!(top_label(&response).is_none());
    }

    #[test]
    fn test_request_shape() {
        let labels = vec!["imposte".to_string()];
        let request = ZeroShotRequest {
            inputs: "IMU 2023",
            parameters: ZeroShotParameters {
                candidate_labels: &labels,
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["inputs"], "IMU 2023");
        assert_eq!(json["parameters"]["candidate_labels"][0], "imposte");
    }

    #[test]
    fn test_endpoint_joins_model() {
        let c = ZeroShotClassifier::new("https://example.test/models/", DEFAULT_MODEL, String::new());
        assert_eq!(
            c.endpoint(),
            "https://example.test/models/vicgalle/xlm-roberta-large-xnli-anli"
        );
    }
}
