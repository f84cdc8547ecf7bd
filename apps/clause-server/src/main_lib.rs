use std::path::Path;
use std::sync::Arc;

use grip_ai::{
    load_contract_text, ClauseExtractor, ClauseExtractorTrait, CompletionProvider, GeminiProvider,
    DEFAULT_TEMPERATURE,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub clause_extractor: Arc<dyn ClauseExtractorTrait>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("GRIP_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    if config.gemini_api_key.trim().is_empty() {
        anyhow::bail!("GEMINI_API_KEY (or GOOGLE_API_KEY) must be set before starting the server");
    }

    let contract_text = load_contract_text(Path::new(&config.contract_path))?;
    tracing::info!(
        "Loaded contract from {} ({} chars)",
        config.contract_path,
        contract_text.len()
    );

    let provider: Arc<dyn CompletionProvider> = Arc::new(GeminiProvider::new(
        &config.gemini_api_key,
        &config.llm_model,
        DEFAULT_TEMPERATURE,
    ));
    let clause_extractor = Arc::new(ClauseExtractor::new(provider, Arc::new(contract_text)));

    Ok(Arc::new(AppState { clause_extractor }))
}
