//! In-memory ledger model shared by the CSV and spreadsheet readers.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::errors::ValidationError;
use crate::Result;

/// Date-only formats accepted in ledger `date` cells, tried in order after
/// the timestamp formats.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// One parsed tabular file: a header row plus string-valued data rows.
///
/// Rows are normalized to the header width at construction; numeric and
/// date interpretation happens at the point of use, not at parse time.
#[derive(Debug, Clone)]
pub struct Ledger {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Ledger {
    /// Build a ledger from raw headers and rows.
    ///
    /// Headers are trimmed. Rows shorter than the header row are padded
    /// with empty cells; longer rows are truncated.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let headers: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                if row.len() < width {
                    row.resize(width, String::new());
                } else if row.len() > width {
                    row.truncate(width);
                }
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows (the header row is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a named column, matching the trimmed header exactly.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// All values of a named column coerced to numbers, or `None` if the
    /// column does not exist. Non-numeric cells coerce to 0.0.
    pub fn numeric_column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| coerce_numeric(&row[idx])).collect())
    }
}

/// Coerce a cell to a number; anything unparseable counts as 0.0.
pub fn coerce_numeric(cell: &str) -> f64 {
    cell.trim().parse::<f64>().unwrap_or(0.0)
}

/// Parse a ledger `date` cell.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DD HH:MM:SS`, and the plain date
/// formats in [`DATE_FORMATS`]. Unlike revenue/cost cells, a date that
/// fails to parse is a validation error rather than a silent default.
pub fn parse_ledger_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date);
        }
    }

    Err(ValidationError::InvalidInput(format!("Invalid date format: {}", value)).into())
}
