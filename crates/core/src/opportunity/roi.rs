//! Baseline and uplift-adjusted ROI projections.

use serde::Serialize;

/// Assumed uplift with the minimum investment: +10%.
pub const UPLIFT_LOW: f64 = 0.10;
/// Assumed uplift with the maximum investment: +30%.
pub const UPLIFT_HIGH: f64 = 0.30;

/// ROI projections for the recommended investment band. Serializes to
/// `{}` when the inputs were insufficient to project anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoiProjections {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<BaselineRoi>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_uplift: Option<UpliftRoi>,
}

impl RoiProjections {
    pub fn is_empty(&self) -> bool {
        self.baseline.is_none() && self.with_uplift.is_none()
    }
}

/// ROI of the unmodified annualized profit against each band bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BaselineRoi {
    pub roi_percent_min_investment: Option<f64>,
    pub roi_percent_max_investment: Option<f64>,
}

/// ROI after the assumed uplift. The low uplift is paired with the
/// minimum investment and the high uplift with the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UpliftRoi {
    pub assumption_uplift_low_pct: f64,
    pub assumption_uplift_high_pct: f64,
    pub projected_roi_percent_min_investment: Option<f64>,
    pub projected_roi_percent_max_investment: Option<f64>,
}

/// Project baseline and uplift-adjusted ROI percentages.
///
/// Returns the empty record when profit or either band bound is unknown.
/// Each percentage is profit / investment x 100, guarded against a
/// non-positive investment bound.
///
/// The uplift percentages describe an assumed revenue increase but are
/// applied to annualized net profit as a proxy, and the small uplift is
/// deliberately tied to the small investment (and large to large).
/// Downstream consumers treat the uplift numbers as assumptions, not
/// predictions.
pub fn project_roi(
    annualized_net_profit: Option<f64>,
    invest_min: Option<f64>,
    invest_max: Option<f64>,
) -> RoiProjections {
    let (Some(profit), Some(invest_min), Some(invest_max)) =
        (annualized_net_profit, invest_min, invest_max)
    else {
        return RoiProjections::default();
    };

    let roi_against = |amount: f64, profit: f64| -> Option<f64> {
        if amount > 0.0 {
            Some(profit / amount * 100.0)
        } else {
            None
        }
    };

    let baseline = BaselineRoi {
        roi_percent_min_investment: roi_against(invest_min, profit),
        roi_percent_max_investment: roi_against(invest_max, profit),
    };

    let uplifted_low = profit + profit * UPLIFT_LOW;
    let uplifted_high = profit + profit * UPLIFT_HIGH;
    let with_uplift = UpliftRoi {
        assumption_uplift_low_pct: UPLIFT_LOW * 100.0,
        assumption_uplift_high_pct: UPLIFT_HIGH * 100.0,
        projected_roi_percent_min_investment: roi_against(invest_min, uplifted_low),
        projected_roi_percent_max_investment: roi_against(invest_max, uplifted_high),
    };

    RoiProjections {
        baseline: Some(baseline),
        with_uplift: Some(with_uplift),
    }
}
