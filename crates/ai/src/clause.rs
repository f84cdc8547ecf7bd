//! Verbatim clause extraction over a preloaded contract.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::completion::{CompletionOutput, CompletionProvider, CompletionRequest};
use crate::error::AiError;

/// Trait for clause extraction.
#[async_trait]
pub trait ClauseExtractorTrait: Send + Sync {
    /// Ask the model for the named clause, verbatim.
    ///
    /// The model's answer is passed through as-is; a missing clause comes
    /// back as the model's literal "Clause not found" reply, not as an
    /// error.
    async fn extract_clause(&self, clause_type: &str) -> Result<String, AiError>;
}

/// Clause extractor over one contract document loaded at startup.
pub struct ClauseExtractor {
    provider: Arc<dyn CompletionProvider>,
    contract_text: Arc<String>,
}

impl ClauseExtractor {
    pub fn new(provider: Arc<dyn CompletionProvider>, contract_text: Arc<String>) -> Self {
        Self {
            provider,
            contract_text,
        }
    }

    fn build_prompt(&self, clause_type: &str) -> String {
        format!(
            "You are a legal assistant. Given the following contract, extract the {} clause verbatim. \n\
             If it's missing, say 'Clause not found'.\n\
             \n\
             Contract:\n\
             --------\n\
             {}\n",
            clause_type, self.contract_text
        )
    }
}

#[async_trait]
impl ClauseExtractorTrait for ClauseExtractor {
    async fn extract_clause(&self, clause_type: &str) -> Result<String, AiError> {
        let clause_type = clause_type.trim();
        if clause_type.is_empty() {
            return Err(AiError::invalid_input("clause_type must not be empty"));
        }

        debug!("Extracting clause: {}", clause_type);

        let request = CompletionRequest::new(self.build_prompt(clause_type));
        let output = self.provider.complete(request).await?;

        let clause = match output {
            CompletionOutput::Text(text) => text.trim().to_string(),
            // A structured answer either carries the clause under the
            // obvious key or gets rendered wholesale.
            CompletionOutput::Structured(value) => value
                .get("clause")
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| value.to_string()),
        };

        Ok(clause)
    }
}
