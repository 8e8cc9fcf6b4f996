use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use super::traits::Probe;
use super::types::{ProbeData, ProbeResult, ProbeTarget};
use crate::constants::{
    CONNECT_OK_MESSAGE, DEFAULT_MODEL_ID, GENERATE_OK_MESSAGE, NETWORK_FAILURE_MESSAGE,
    NO_SAMPLE_MODEL, PROBE_MAX_OUTPUT_TOKENS, PROBE_PROMPT, PROBE_TEMPERATURE, VERTEX_API_HOST,
    VERTEX_API_VERSION, VERTEX_PUBLISHER,
};
use crate::utils::ProbeError;

/// Probe for Vertex AI regional endpoints
///
/// Each call is one request; nothing is retried or cached between calls.
#[derive(Debug, Clone)]
pub struct VertexProbe {
    client: Client,
    base_url: Option<String>,
}

impl VertexProbe {
    /// Create a probe that talks to `https://{location}-aiplatform.googleapis.com`
    pub fn new() -> Result<Self, ProbeError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: None,
        })
    }

    /// Replace the regional host (scheme included) with a fixed base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    fn endpoint_root(&self, location: &str) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}-aiplatform.{}", location, VERTEX_API_HOST),
        }
    }

    /// URL of the publisher model listing
    pub fn models_url(&self, target: &ProbeTarget) -> String {
        format!(
            "{}/{}/projects/{}/locations/{}/publishers/{}/models",
            self.endpoint_root(&target.location),
            VERTEX_API_VERSION,
            target.project,
            target.location,
            VERTEX_PUBLISHER,
        )
    }

    /// URL of `generateContent` for one model
    pub fn generate_url(&self, target: &ProbeTarget, model_id: &str) -> String {
        format!("{}/{}:generateContent", self.models_url(target), model_id)
    }

    async fn list_models(&self, target: &ProbeTarget) -> Result<ProbeData, ProbeError> {
        let url = self.models_url(target);
        debug!(%url, "listing publisher models");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&target.token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable body is treated like a non-JSON one
            let body = response.text().await.unwrap_or_default();
            return Err(listing_error(status, &body));
        }

        let body: Value = serde_json::from_str(&response.text().await?)?;
        Ok(summarize_models(&body))
    }

    async fn generate_content(
        &self,
        target: &ProbeTarget,
        model_id: &str,
    ) -> Result<ProbeData, ProbeError> {
        let url = self.generate_url(target, model_id);
        debug!(%url, model = model_id, "submitting generation probe");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&target.token)
            .header(CONTENT_TYPE, "application/json")
            .json(&probe_payload())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::GenerationStatus(status.as_u16()));
        }

        let body: Value = serde_json::from_str(&response.text().await?)?;
        let output = first_candidate_text(&body).ok_or(ProbeError::MissingText)?;

        Ok(ProbeData::Generation {
            output: output.to_string(),
            model: model_id.to_string(),
        })
    }
}

#[async_trait]
impl Probe for VertexProbe {
    async fn connect(&self, target: &ProbeTarget) -> ProbeResult {
        match self.list_models(target).await {
            Ok(data) => {
                info!(project = %target.project, location = %target.location, "connectivity probe passed");
                ProbeResult::ok(CONNECT_OK_MESSAGE, data)
            }
            Err(e) => {
                warn!(error = %e, "connectivity probe failed");
                let message = if e.is_network() {
                    NETWORK_FAILURE_MESSAGE.to_string()
                } else {
                    e.to_string()
                };
                ProbeResult::failed(message)
            }
        }
    }

    async fn generate(&self, target: &ProbeTarget, model_id: Option<&str>) -> ProbeResult {
        let model_id = model_id.unwrap_or(DEFAULT_MODEL_ID);
        match self.generate_content(target, model_id).await {
            Ok(data) => {
                info!(model = model_id, "generation probe passed");
                ProbeResult::ok(GENERATE_OK_MESSAGE, data)
            }
            Err(e) => {
                warn!(error = %e, model = model_id, "generation probe failed");
                ProbeResult::failed(e.to_string())
            }
        }
    }
}

/// Request body asking the model for a single fixed word
fn probe_payload() -> Value {
    json!({
        "contents": {
            "role": "user",
            "parts": [{ "text": PROBE_PROMPT }]
        },
        "generationConfig": {
            "temperature": PROBE_TEMPERATURE,
            "maxOutputTokens": PROBE_MAX_OUTPUT_TOKENS
        }
    })
}

/// Build the failure for a non-2xx listing response
fn listing_error(status: StatusCode, body: &str) -> ProbeError {
    let fallback = ProbeError::Status {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
    };

    let Ok(doc) = serde_json::from_str::<Value>(body) else {
        return fallback;
    };

    let error = doc.get("error");
    match (
        error.and_then(|e| e.get("code")),
        error.and_then(|e| e.get("message")),
    ) {
        (Some(code), Some(message)) => ProbeError::Api {
            code: json_text(code),
            message: json_text(message),
        },
        _ => fallback,
    }
}

fn json_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn summarize_models(doc: &Value) -> ProbeData {
    let models = doc.get("models").and_then(Value::as_array);
    let models_found = models.map_or(0, Vec::len);
    let sample = models
        .and_then(|m| m.first())
        .and_then(|m| m.get("name"))
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .unwrap_or(NO_SAMPLE_MODEL)
        .to_string();

    ProbeData::Models {
        models_found,
        sample,
    }
}

fn first_candidate_text(doc: &Value) -> Option<&str> {
    doc.pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}
