//! Grip AI - LLM access using rig-core.
//!
//! This crate owns everything that talks to (or pretends to be) a
//! language model:
//!
//! - `completion`: the `CompletionProvider` seam, the Gemini implementation,
//!   and a deterministic stub for tests
//! - `output`: tolerant JSON extraction from free-form model text
//! - `document`: loading the contract document the clause service reads
//! - `clause`: verbatim clause extraction over a preloaded contract
//! - `advisor`: the investor-advice narrative over computed pipeline numbers
//!
//! The model is treated as an opaque collaborator: nothing here validates
//! what it says, only the shape it says it in.

pub mod advisor;
pub mod clause;
pub mod completion;
pub mod document;
pub mod error;
pub mod output;

pub use advisor::{InvestmentAdvisor, InvestmentAdvisorTrait};
pub use clause::{ClauseExtractor, ClauseExtractorTrait};
pub use completion::{
    CompletionOutput, CompletionProvider, CompletionRequest, GeminiProvider, StubProvider,
    DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};
pub use document::load_contract_text;
pub use error::AiError;
pub use output::parse_llm_json;
