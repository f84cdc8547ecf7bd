use std::env;

use grip_ai::DEFAULT_MODEL;

/// Runtime configuration, read once at startup.
pub struct Config {
    pub listen_addr: String,
    pub gemini_api_key: String,
    pub llm_model: String,
}

impl Config {
    pub fn from_env() -> Self {
        let listen_addr = env::var("GRIP_OPPORTUNITY_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8001".to_string());
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("GOOGLE_API_KEY"))
            .unwrap_or_default();
        let llm_model = env::var("GRIP_LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self {
            listen_addr,
            gemini_api_key,
            llm_model,
        }
    }
}
