use crate::models::GenerationRequest;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the text-generation service
#[derive(Debug, Error)]
pub enum AiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Inference request timed out after {0}s")]
    Timeout(u64),

    #[error("Inference API returned {status}: {body}")]
    ApiError { status: StatusCode, body: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Anything that can turn a prompt into generated text
pub trait TextGenerator: Send + Sync {
    fn generate(
        &self,
        request: GenerationRequest,
    ) -> impl Future<Output = Result<String, AiError>> + Send;
}

/// Field names under which inference backends return generated text, in priority order
const TEXT_FIELDS: [TextField; 2] = [TextField::Response, TextField::Text];

#[derive(Debug, Clone, Copy)]
enum TextField {
    Response,
    Text,
}

/// Generated output; backends disagree on which field carries the text
#[derive(Debug, Default, Deserialize)]
struct GenerationOutput {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

impl GenerationOutput {
    fn field(&self, field: TextField) -> Option<&str> {
        match field {
            TextField::Response => self.response.as_deref(),
            TextField::Text => self.text.as_deref(),
        }
    }

    /// First non-empty text field, or empty text if none is present
    fn into_text(self) -> String {
        TEXT_FIELDS
            .iter()
            .find_map(|f| self.field(*f).filter(|t| !t.is_empty()))
            .unwrap_or_default()
            .to_string()
    }
}

/// Either a `{"result": {...}}` envelope or the bare output object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenerationEnvelope {
    Wrapped { result: GenerationOutput },
    Bare(GenerationOutput),
}

impl GenerationEnvelope {
    fn into_text(self) -> String {
        match self {
            GenerationEnvelope::Wrapped { result } => result.into_text(),
            GenerationEnvelope::Bare(output) => output.into_text(),
        }
    }
}

/// Decode a generation response body into plain text
pub fn extract_generated_text(body: &str) -> Result<String, AiError> {
    serde_json::from_str::<GenerationEnvelope>(body)
        .map(GenerationEnvelope::into_text)
        .map_err(|e| AiError::InvalidResponse(format!("Failed to decode generation output: {}", e)))
}

/// HTTP client for a hosted text-generation model
///
/// Requests are sent as `POST {endpoint}/{model}` with a bearer token.
pub struct AiClient {
    endpoint: String,
    model: String,
    api_token: String,
    timeout_secs: u64,
    client: Client,
}

impl AiClient {
    /// Create a new inference client
    pub fn new(
        endpoint: String,
        model: String,
        api_token: String,
        timeout_secs: u64,
    ) -> Result<Self, AiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            endpoint,
            model,
            api_token,
            timeout_secs,
            client,
        })
    }

    fn run_url(&self) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), self.model)
    }

    /// Timeouts surface as `Timeout` whether they hit while sending or while reading the body
    fn transport_error(&self, e: reqwest::Error) -> AiError {
        if e.is_timeout() {
            AiError::Timeout(self.timeout_secs)
        } else {
            AiError::RequestError(e)
        }
    }
}

impl TextGenerator for AiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, AiError> {
        let url = self.run_url();

        tracing::debug!(
            "Calling inference model {} (max_tokens: {}, temperature: {})",
            self.model,
            request.max_tokens,
            request.temperature
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Inference call to {} failed: {} - {}", self.model, status, body);
            return Err(AiError::ApiError { status, body });
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        let text = extract_generated_text(&body)?;

        tracing::debug!("Inference returned {} characters", text.len());

        Ok(text)
    }
}
