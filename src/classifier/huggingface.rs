// huggingface.rs
use crate::classifier::discriminative::BatchLabeler;
use crate::classifier::generative::TextGenerator;
use crate::classifier::ClassifierError;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_GENERATIVE_MODEL: &str = "google/flan-t5-base";

const MAX_NEW_TOKENS: u32 = 10;

/// One hosted model behind the inference API. Built once at startup and
/// shared read-only afterwards.
pub struct HostedModel {
    client: Client,
    url: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Generated {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
struct Scored {
    label: String,
    score: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScoredBatch {
    PerInput(Vec<Vec<Scored>>),
    Flat(Vec<Scored>),
}

fn best(scores: Vec<Scored>) -> Option<String> {
    scores
        .into_iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .map(|s| s.label)
}

impl HostedModel {
    pub fn new(
        base_url: &str,
        model: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ClassifierError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClassifierError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            url: format!("{}/models/{}", base_url.trim_end_matches('/'), model),
            token: token.filter(|t| !t.trim().is_empty()),
        })
    }

    fn post(&self, body: &Value) -> Result<Value, ClassifierError> {
        let mut req = self.client.post(&self.url).json(body);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let resp = req
            .send()
            .map_err(|e| ClassifierError::Request(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ClassifierError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(ClassifierError::Request(format!("HTTP {status}: {text}")));
        }

        serde_json::from_str(&text).map_err(|e| ClassifierError::Response(e.to_string()))
    }
}

impl TextGenerator for HostedModel {
    fn generate(&self, prompt: &str) -> Result<String, ClassifierError> {
        let body = json!({
            "inputs": prompt,
            "parameters": { "max_new_tokens": MAX_NEW_TOKENS },
            "options": { "wait_for_model": true }
        });

        let value = self.post(&body)?;
        let outputs: Vec<Generated> =
            serde_json::from_value(value).map_err(|e| ClassifierError::Response(e.to_string()))?;

        outputs
            .into_iter()
            .next()
            .map(|g| g.generated_text.trim().to_string())
            .ok_or_else(|| ClassifierError::Response("no generated text".into()))
    }
}

impl BatchLabeler for HostedModel {
    fn top_labels(&self, inputs: &[String]) -> Result<Vec<String>, ClassifierError> {
        let body = json!({
            "inputs": inputs,
            "options": { "wait_for_model": true }
        });

        let value = self.post(&body)?;
        let batch: ScoredBatch =
            serde_json::from_value(value).map_err(|e| ClassifierError::Response(e.to_string()))?;

        let labels: Option<Vec<String>> = match batch {
            ScoredBatch::PerInput(rows) => rows.into_iter().map(best).collect(),
            // A single input sometimes comes back unnested: all scores for that input.
            ScoredBatch::Flat(scores) if inputs.len() == 1 => best(scores).map(|l| vec![l]),
            // Otherwise a flat list is one top prediction per input.
            ScoredBatch::Flat(scores) => Some(scores.into_iter().map(|s| s.label).collect()),
        };

        labels.ok_or_else(|| ClassifierError::Response("empty prediction".into()))
    }
}

/// Stand-in used when a hosted model could not be set up. Every call fails,
/// so names are labelled as errors instead of the app refusing to start.
pub struct UnavailableModel {
    reason: String,
}

impl UnavailableModel {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl TextGenerator for UnavailableModel {
    fn generate(&self, _prompt: &str) -> Result<String, ClassifierError> {
        Err(ClassifierError::Unavailable(self.reason.clone()))
    }
}

impl BatchLabeler for UnavailableModel {
    fn top_labels(&self, _inputs: &[String]) -> Result<Vec<String>, ClassifierError> {
        Err(ClassifierError::Unavailable(self.reason.clone()))
    }
}
