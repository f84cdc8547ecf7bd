//! Heuristic valuation from annualized revenue and growth.

/// Pick a revenue multiple from the growth rate.
///
/// Decision ladder, first match wins:
///   - unknown growth → 1.5
///   - > 50%          → 6.0
///   - > 20%          → 4.0
///   - >= 0%          → 2.5
///   - negative       → 1.5
pub fn revenue_multiple(growth_rate_percent: Option<f64>) -> f64 {
    match growth_rate_percent {
        None => 1.5,
        Some(growth) if growth > 50.0 => 6.0,
        Some(growth) if growth > 20.0 => 4.0,
        Some(growth) if growth >= 0.0 => 2.5,
        Some(_) => 1.5,
    }
}

/// Estimate a point valuation: annualized revenue times the growth
/// multiple, floored at zero. `None` when annualized revenue is unknown.
pub fn estimate_valuation(
    annual_revenue: Option<f64>,
    growth_rate_percent: Option<f64>,
) -> Option<f64> {
    let annual_revenue = annual_revenue?;
    let multiple = revenue_multiple(growth_rate_percent);
    Some((annual_revenue * multiple).max(0.0))
}
