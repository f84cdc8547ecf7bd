//! Recommended investment range as a slice of the valuation.

use serde::Serialize;

/// A recommended {min, max} investment band. Both bounds are null
/// together when no valuation is available.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InvestmentRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl InvestmentRange {
    pub const EMPTY: InvestmentRange = InvestmentRange { min: None, max: None };
}

/// Derive the investment band from the valuation and growth rate.
///
/// Percentage ladder, first match wins (low, high share of valuation):
///   - unknown growth → (0.02, 0.06)
///   - > 50%          → (0.05, 0.20)
///   - > 20%          → (0.04, 0.15)
///   - >= 0%          → (0.03, 0.10)
///   - negative       → (0.02, 0.05)
pub fn derive_investment_range(
    valuation: Option<f64>,
    growth_rate_percent: Option<f64>,
) -> InvestmentRange {
    let Some(valuation) = valuation else {
        return InvestmentRange::EMPTY;
    };

    let (low_pct, high_pct) = match growth_rate_percent {
        None => (0.02, 0.06),
        Some(growth) if growth > 50.0 => (0.05, 0.20),
        Some(growth) if growth > 20.0 => (0.04, 0.15),
        Some(growth) if growth >= 0.0 => (0.03, 0.10),
        Some(_) => (0.02, 0.05),
    };

    InvestmentRange {
        min: Some(valuation * low_pct),
        max: Some(valuation * high_pct),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_valuation_means_empty_range() {
        let range = derive_investment_range(None, Some(25.0));
        assert_eq!(range, InvestmentRange::EMPTY);
    }

    #[test]
    fn range_for_moderate_growth() {
        // 30000 * 0.03 / 30000 * 0.10
        let range = derive_investment_range(Some(30000.0), Some(0.0));
        assert_eq!(range.min, Some(900.0));
        assert_eq!(range.max, Some(3000.0));
    }

    #[test]
    fn range_ladder() {
        let v = Some(100000.0);
        assert_eq!(derive_investment_range(v, None).min, Some(2000.0));
        assert_eq!(derive_investment_range(v, Some(60.0)).max, Some(20000.0));
        assert_eq!(derive_investment_range(v, Some(30.0)).min, Some(4000.0));
        assert_eq!(derive_investment_range(v, Some(-3.0)).max, Some(5000.0));
    }

    #[test]
    fn min_never_exceeds_max() {
        for growth in [None, Some(80.0), Some(30.0), Some(5.0), Some(-10.0)] {
            let range = derive_investment_range(Some(50000.0), growth);
            assert!(range.min.unwrap() <= range.max.unwrap());
        }
    }
}
