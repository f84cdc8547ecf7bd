//! Grip Core - Ledger ingestion and the investor-opportunity pipeline.
//!
//! This crate contains the deterministic half of Grip: parsing uploaded
//! transaction/payment ledgers and turning them into financial metrics,
//! a valuation estimate, a recommended investment range, ROI projections,
//! and a risk assessment. It knows nothing about HTTP or LLM providers;
//! those live in the server apps and the `grip-ai` crate.

pub mod errors;
pub mod ledger;
pub mod opportunity;

// Re-export the pipeline types
pub use opportunity::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
