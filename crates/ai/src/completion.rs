//! The completion-provider seam.
//!
//! Services depend on [`CompletionProvider`] rather than any concrete
//! SDK, so the Gemini implementation can be swapped for the stub in
//! tests (no network access) or another rig-core provider later.

use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use rig::{client::CompletionClient, completion::Prompt, providers::gemini};
use serde_json::Value;

use crate::error::AiError;

/// Model used when no override is configured.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
/// Sampling temperature used when no override is configured.
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// One completion request: a prompt plus optional generation settings.
/// Unset settings fall back to the provider's configured defaults.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub preamble: Option<String>,
    pub temperature: Option<f64>,
    pub max_tokens: Option<u64>,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            preamble: None,
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = Some(preamble.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u64) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// What a provider answered with.
///
/// Providers that speak plain text yield `Text`; providers that return
/// pre-parsed JSON yield `Structured`. Callers resolve the two arms by
/// matching, never by probing.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionOutput {
    Text(String),
    Structured(Value),
}

impl CompletionOutput {
    /// The raw text, when this output is plain text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CompletionOutput::Text(text) => Some(text),
            CompletionOutput::Structured(_) => None,
        }
    }
}

/// Adapter over one configured model.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Run one completion. No retries; a failing call is the caller's
    /// error to surface.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionOutput, AiError>;
}

// ============================================================================
// Gemini provider (rig-core)
// ============================================================================

/// Gemini-backed provider. Always yields [`CompletionOutput::Text`].
pub struct GeminiProvider {
    api_key: String,
    model_id: String,
    temperature: f64,
}

impl GeminiProvider {
    pub fn new(api_key: impl Into<String>, model_id: impl Into<String>, temperature: f64) -> Self {
        Self {
            api_key: api_key.into(),
            model_id: model_id.into(),
            temperature,
        }
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionOutput, AiError> {
        if self.api_key.trim().is_empty() {
            return Err(AiError::MissingApiKey("gemini".to_string()));
        }

        debug!(
            "Gemini completion with model {} ({} prompt chars)",
            self.model_id,
            request.prompt.len()
        );

        let client: gemini::Client<HttpClient> =
            gemini::Client::new(&self.api_key).map_err(|e| AiError::Provider(e.to_string()))?;

        let mut builder = client.agent(&self.model_id);
        if let Some(preamble) = &request.preamble {
            builder = builder.preamble(preamble);
        }
        builder = builder.temperature(request.temperature.unwrap_or(self.temperature));
        if let Some(tokens) = request.max_tokens {
            builder = builder.max_tokens(tokens);
        }

        let text = builder
            .build()
            .prompt(&request.prompt)
            .await
            .map_err(|e| AiError::Provider(e.to_string()))?;

        Ok(CompletionOutput::Text(text))
    }
}

// ============================================================================
// Stub provider for tests
// ============================================================================

/// A provider that returns a canned output and records what it was asked.
pub struct StubProvider {
    output: Result<CompletionOutput, String>,
    requests: std::sync::Mutex<Vec<CompletionRequest>>,
}

impl StubProvider {
    /// Stub that answers with plain text.
    pub fn with_text(text: &str) -> Self {
        Self {
            output: Ok(CompletionOutput::Text(text.to_string())),
            requests: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Stub that answers with a pre-parsed JSON value.
    pub fn with_structured(value: Value) -> Self {
        Self {
            output: Ok(CompletionOutput::Structured(value)),
            requests: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Stub whose completion always fails.
    pub fn failing(message: &str) -> Self {
        Self {
            output: Err(message.to_string()),
            requests: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Prompt of the most recent request, for assertions.
    pub fn last_prompt(&self) -> Option<String> {
        self.requests
            .lock()
            .ok()?
            .last()
            .map(|request| request.prompt.clone())
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionOutput, AiError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        match &self.output {
            Ok(output) => Ok(output.clone()),
            Err(message) => Err(AiError::Provider(message.clone())),
        }
    }
}
