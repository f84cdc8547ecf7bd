//! Financial metrics aggregation over a transaction ledger.

use std::collections::BTreeMap;

use serde::Serialize;

use chrono::{Datelike, NaiveDate};

use crate::errors::{Error, ValidationError};
use crate::ledger::{coerce_numeric, parse_ledger_date, Ledger};
use crate::Result;

/// Columns every transactions upload must carry, in sorted order.
pub const REQUIRED_TRANSACTION_COLUMNS: [&str; 3] = ["cost", "date", "revenue"];

/// Period-aggregated metrics derived once per request from the
/// transaction ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub total_revenue: f64,
    pub total_cost: f64,
    pub net_profit: f64,
    pub months_of_data: u32,
    pub avg_monthly_revenue: f64,
    pub growth_rate_percent: Option<f64>,
    pub annualized_net_profit: Option<f64>,
}

impl Metrics {
    /// Annualized revenue estimate: the monthly average scaled to a year,
    /// or `None` when the ledger holds no rows at all.
    pub fn annualized_revenue(&self) -> Option<f64> {
        if self.months_of_data > 0 {
            Some(self.avg_monthly_revenue * 12.0)
        } else {
            None
        }
    }
}

/// Aggregate a transaction ledger into [`Metrics`].
///
/// Requires the `date`, `revenue`, and `cost` columns. Revenue and cost
/// cells are coerced to numbers (anything unparseable counts as 0.0);
/// date cells must parse.
///
/// Monthly figures are computed over the full calendar span between the
/// earliest and latest transaction month: a month inside the span with no
/// rows still counts toward `months_of_data` and contributes 0.0 revenue
/// to the monthly mean. `growth_rate_percent` compares the last month of
/// the span against the first and is only defined when the span covers at
/// least two months and the first month's revenue is non-zero.
pub fn calculate_metrics(transactions: &Ledger) -> Result<Metrics> {
    let (Some(date_idx), Some(revenue_idx), Some(cost_idx)) = (
        transactions.column_index("date"),
        transactions.column_index("revenue"),
        transactions.column_index("cost"),
    ) else {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Transactions file must contain columns: {:?}",
            REQUIRED_TRANSACTION_COLUMNS
        ))));
    };

    let mut total_revenue = 0.0;
    let mut total_cost = 0.0;
    let mut monthly_revenue: BTreeMap<i64, f64> = BTreeMap::new();

    for row in transactions.rows() {
        let date = parse_ledger_date(&row[date_idx])?;
        let revenue = coerce_numeric(&row[revenue_idx]);
        let cost = coerce_numeric(&row[cost_idx]);

        total_revenue += revenue;
        total_cost += cost;
        *monthly_revenue.entry(month_index(date)).or_insert(0.0) += revenue;
    }

    let net_profit = total_revenue - total_cost;

    let months_of_data = match (
        monthly_revenue.keys().next(),
        monthly_revenue.keys().next_back(),
    ) {
        (Some(first), Some(last)) => (last - first + 1) as u32,
        _ => 0,
    };

    let avg_monthly_revenue = if months_of_data > 0 {
        // Every transaction lands in some month of the span, so the mean
        // over all span months (empty ones included) is total / span.
        total_revenue / months_of_data as f64
    } else {
        0.0
    };

    let first_month = monthly_revenue.values().next().copied();
    let last_month = monthly_revenue.values().next_back().copied();
    let growth_rate_percent = match (first_month, last_month) {
        (Some(first), Some(last)) if months_of_data >= 2 && first != 0.0 => {
            Some((last - first) / first * 100.0)
        }
        _ => None,
    };

    let annualized_net_profit = if months_of_data > 0 {
        Some(net_profit * (12.0 / months_of_data as f64))
    } else {
        None
    };

    Ok(Metrics {
        total_revenue,
        total_cost,
        net_profit,
        months_of_data,
        avg_monthly_revenue,
        growth_rate_percent,
        annualized_net_profit,
    })
}

/// Number of whole months since year zero, used to order and span months.
fn month_index(date: NaiveDate) -> i64 {
    date.year() as i64 * 12 + date.month0() as i64
}
