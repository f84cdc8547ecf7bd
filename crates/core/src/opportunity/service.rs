//! Composition of the pipeline stages into one analysis.

use log::debug;
use serde::Serialize;

use crate::ledger::Ledger;
use crate::opportunity::investment::{derive_investment_range, InvestmentRange};
use crate::opportunity::metrics::{calculate_metrics, Metrics};
use crate::opportunity::risk::{compute_risk, payment_coverage, RiskAssessment};
use crate::opportunity::roi::{project_roi, RoiProjections};
use crate::opportunity::valuation::estimate_valuation;
use crate::Result;

/// Everything the deterministic pipeline derives for one request.
///
/// Field names are the wire names; the opportunity server embeds this
/// record directly in its response.
#[derive(Debug, Clone, Serialize)]
pub struct OpportunityAnalysis {
    pub metrics: Metrics,
    pub annualized_revenue_estimate: Option<f64>,
    pub valuation_estimate: Option<f64>,
    pub recommended_investment_range: InvestmentRange,
    pub roi_projections: RoiProjections,
    pub risk: RiskAssessment,
}

/// Trait for the opportunity analysis pipeline.
pub trait OpportunityServiceTrait: Send + Sync {
    /// Run metrics, valuation, investment range, ROI projections, and risk
    /// scoring over one transactions ledger and an optional payments
    /// ledger. Either the whole pipeline completes or an error is
    /// returned; there are no partial results.
    fn analyze(
        &self,
        transactions: &Ledger,
        payments: Option<&Ledger>,
    ) -> Result<OpportunityAnalysis>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OpportunityService;

impl OpportunityService {
    pub fn new() -> Self {
        Self
    }
}

impl OpportunityServiceTrait for OpportunityService {
    fn analyze(
        &self,
        transactions: &Ledger,
        payments: Option<&Ledger>,
    ) -> Result<OpportunityAnalysis> {
        debug!(
            "Analyzing opportunity: {} transaction rows, payments ledger: {}",
            transactions.len(),
            payments.is_some()
        );

        let metrics = calculate_metrics(transactions)?;
        let annualized_revenue = metrics.annualized_revenue();
        let valuation = estimate_valuation(annualized_revenue, metrics.growth_rate_percent);
        let range = derive_investment_range(valuation, metrics.growth_rate_percent);
        let roi_projections = project_roi(metrics.annualized_net_profit, range.min, range.max);

        let coverage = payment_coverage(payments, metrics.total_revenue);
        let risk = compute_risk(&metrics, coverage);

        Ok(OpportunityAnalysis {
            metrics,
            annualized_revenue_estimate: annualized_revenue,
            valuation_estimate: valuation,
            recommended_investment_range: range,
            roi_projections,
            risk,
        })
    }
}
