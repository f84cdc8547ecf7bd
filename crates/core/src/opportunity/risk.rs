//! Additive risk scoring over history depth, growth, and payment coverage.

use serde::Serialize;

use crate::ledger::Ledger;
use crate::opportunity::metrics::Metrics;

/// Risk band derived from the raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

/// Risk score, its raw point total, and one explanatory driver per factor
/// (history, growth, coverage, in that order).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub risk_score: RiskBand,
    pub raw_score: u32,
    pub drivers: Vec<String>,
}

/// Fraction of invoiced revenue actually collected.
///
/// Requires a payments ledger with an `amount_paid` column and a positive
/// total revenue; otherwise coverage is unknown. A payments ledger
/// without the column is not an error, just unknown coverage.
pub fn payment_coverage(payments: Option<&Ledger>, total_revenue: f64) -> Option<f64> {
    let amounts = payments?.numeric_column("amount_paid")?;
    if total_revenue > 0.0 {
        Some(amounts.iter().sum::<f64>() / total_revenue)
    } else {
        None
    }
}

/// Score risk from the metrics and the coverage ratio.
///
/// Three independent factors each add 0-2 points:
///   - months of data: <3 → +2, <6 → +1
///   - growth: unknown → +1, negative → +2, <10% → +1
///   - coverage: unknown → +1, <0.7 → +2
///
/// Bands: raw score <=1 Low, <=3 Medium, else High.
pub fn compute_risk(metrics: &Metrics, coverage: Option<f64>) -> RiskAssessment {
    let mut score = 0u32;
    let mut drivers = Vec::with_capacity(3);

    let months = metrics.months_of_data;
    if months < 3 {
        score += 2;
        drivers.push("Very limited historic data (<3 months).".to_string());
    } else if months < 6 {
        score += 1;
        drivers.push("Limited historic data (3-6 months).".to_string());
    } else {
        drivers.push("Sufficient historic data (>6 months).".to_string());
    }

    match metrics.growth_rate_percent {
        None => {
            score += 1;
            drivers.push("Growth rate unknown.".to_string());
        }
        Some(growth) if growth < 0.0 => {
            score += 2;
            drivers.push(format!("Negative growth ({:.1}%).", growth));
        }
        Some(growth) if growth < 10.0 => {
            score += 1;
            drivers.push(format!("Low growth ({:.1}%).", growth));
        }
        Some(growth) => {
            drivers.push(format!("Healthy growth ({:.1}%).", growth));
        }
    }

    match coverage {
        None => {
            score += 1;
            drivers.push("Payment coverage unknown.".to_string());
        }
        Some(coverage) if coverage < 0.7 => {
            score += 2;
            drivers.push(format!("Low payment collection rate ({:.2}).", coverage));
        }
        Some(coverage) => {
            drivers.push(format!("Good payment collection rate ({:.2}).", coverage));
        }
    }

    let risk_score = if score <= 1 {
        RiskBand::Low
    } else if score <= 3 {
        RiskBand::Medium
    } else {
        RiskBand::High
    };

    RiskAssessment {
        risk_score,
        raw_score: score,
        drivers,
    }
}
