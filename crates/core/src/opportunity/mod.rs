//! The investor-opportunity pipeline.
//!
//! Five stateless stages: metrics aggregation, valuation, investment
//! range, ROI projection, and risk scoring. [`service`] composes them in
//! fixed order; each stage is a pure function usable on its own.

pub mod investment;
pub mod metrics;
pub mod risk;
pub mod roi;
pub mod service;
pub mod valuation;

pub use investment::{derive_investment_range, InvestmentRange};
pub use metrics::{calculate_metrics, Metrics, REQUIRED_TRANSACTION_COLUMNS};
pub use risk::{compute_risk, payment_coverage, RiskAssessment, RiskBand};
pub use roi::{project_roi, BaselineRoi, RoiProjections, UpliftRoi, UPLIFT_HIGH, UPLIFT_LOW};
pub use service::{OpportunityAnalysis, OpportunityService, OpportunityServiceTrait};
pub use valuation::{estimate_valuation, revenue_multiple};
