use std::env;

use grip_ai::DEFAULT_MODEL;

/// Runtime configuration, read once at startup.
pub struct Config {
    pub listen_addr: String,
    /// Path to the contract document served by `/extract_clause`.
    /// `.pdf` is extracted with pdf-extract; `.txt` is read as UTF-8.
    pub contract_path: String,
    pub gemini_api_key: String,
    pub llm_model: String,
}

impl Config {
    pub fn from_env() -> Self {
        let listen_addr =
            env::var("GRIP_CLAUSE_LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".to_string());
        let contract_path =
            env::var("GRIP_CONTRACT_PATH").unwrap_or_else(|_| "contract.pdf".to_string());
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("GOOGLE_API_KEY"))
            .unwrap_or_default();
        let llm_model = env::var("GRIP_LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self {
            listen_addr,
            contract_path,
            gemini_api_key,
            llm_model,
        }
    }
}
