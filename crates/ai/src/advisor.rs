//! Investor-advice generation over a computed opportunity analysis.

use std::sync::Arc;

use async_trait::async_trait;
use grip_core::opportunity::OpportunityAnalysis;
use log::debug;
use serde_json::Value;

use crate::completion::{CompletionOutput, CompletionProvider, CompletionRequest};
use crate::error::AiError;
use crate::output::parse_llm_json;

/// Trait for turning an analysis plus a company profile into advice.
#[async_trait]
pub trait InvestmentAdvisorTrait: Send + Sync {
    /// Ask the model for an investment recommendation.
    ///
    /// The answer is always a JSON value: either the object the model
    /// returned or a `raw_text` wrapper around its unparseable reply.
    async fn advise(
        &self,
        profile_text: &str,
        analysis: &OpportunityAnalysis,
    ) -> Result<Value, AiError>;
}

/// Advisor backed by a completion provider.
pub struct InvestmentAdvisor {
    provider: Arc<dyn CompletionProvider>,
}

impl InvestmentAdvisor {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    fn build_prompt(
        &self,
        profile_text: &str,
        analysis: &OpportunityAnalysis,
    ) -> Result<String, AiError> {
        let metrics_json = serde_json::to_string(&analysis.metrics)
            .map_err(|e| AiError::internal(e.to_string()))?;
        let roi_json = serde_json::to_string(&analysis.roi_projections)
            .map_err(|e| AiError::internal(e.to_string()))?;
        let risk_json =
            serde_json::to_string(&analysis.risk).map_err(|e| AiError::internal(e.to_string()))?;

        Ok(format!(
            "\nYou are an experienced investor analyst writing for other investors.\n\
             Given the following partner/company profile and computed numeric metrics, produce a concise JSON object that helps an investor decide whether to invest.\n\
             \n\
             Input:\n\
             - profile_text: {profile}\n\
             - metrics (JSON): {metrics}\n\
             - valuation_estimate: {valuation}\n\
             - recommended_investment_range: {invest_min} - {invest_max}\n\
             - roi_projections (JSON): {roi}\n\
             - risk (JSON): {risk}\n\
             \n\
             Task:\n\
             Return ONLY valid JSON with keys:\n\
             - investment_summary: short string (yes/no + 1-sentence rationale)\n\
             - recommended_investment_amount: number (single recommended amount within the provided range)\n\
             - expected_payback_months: number or string range\n\
             - high_level_strategy: array of 2-3 bullet strings explaining how investor money should be used (e.g., product dev, sales)\n\
             - main_risks: array of strings\n\
             - confidence: one-line confidence note (e.g., 'Low / Medium / High confidence' and reason)\n\
             \n\
             Do not output any extra text.\n",
            profile = profile_text,
            metrics = metrics_json,
            valuation = render_amount(analysis.valuation_estimate),
            invest_min = render_amount(analysis.recommended_investment_range.min),
            invest_max = render_amount(analysis.recommended_investment_range.max),
            roi = roi_json,
            risk = risk_json,
        ))
    }
}

/// Null-safe rendering of an optional amount for the prompt body.
fn render_amount(value: Option<f64>) -> String {
    match value {
        Some(amount) => amount.to_string(),
        None => "null".to_string(),
    }
}

#[async_trait]
impl InvestmentAdvisorTrait for InvestmentAdvisor {
    async fn advise(
        &self,
        profile_text: &str,
        analysis: &OpportunityAnalysis,
    ) -> Result<Value, AiError> {
        debug!("Requesting investment advice ({} profile chars)", profile_text.len());

        let prompt = self.build_prompt(profile_text, analysis)?;
        let output = self.provider.complete(CompletionRequest::new(prompt)).await?;

        let advice = match output {
            CompletionOutput::Text(text) => parse_llm_json(&text),
            CompletionOutput::Structured(value) => value,
        };

        Ok(advice)
    }
}
