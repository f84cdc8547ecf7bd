//! Excel ledger reader and upload format dispatch.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, DataType, Reader};

use crate::errors::ValidationError;
use crate::ledger::csv::parse_csv_ledger;
use crate::ledger::model::Ledger;
use crate::Result;

/// Supported upload formats, decided by the lowercased filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerFormat {
    Csv,
    Spreadsheet,
}

impl LedgerFormat {
    pub fn from_filename(filename: &str) -> Result<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".csv") {
            Ok(Self::Csv)
        } else if lower.ends_with(".xlsx") || lower.ends_with(".xls") {
            Ok(Self::Spreadsheet)
        } else {
            Err(ValidationError::InvalidInput(
                "Unsupported file type. Please upload .csv or .xlsx".to_string(),
            )
            .into())
        }
    }
}

/// Parse an uploaded file into a [`Ledger`], dispatching on the filename.
pub fn parse_ledger_file(filename: &str, content: &[u8]) -> Result<Ledger> {
    match LedgerFormat::from_filename(filename)? {
        LedgerFormat::Csv => parse_csv_ledger(content),
        LedgerFormat::Spreadsheet => parse_spreadsheet_ledger(content),
    }
}

/// Parse XLSX/XLS bytes into a [`Ledger`].
///
/// Reads the first sheet only; the first row of its used range is the
/// header row. Date cells are rendered as `YYYY-MM-DD` so the date parser
/// sees the same shape it would from a CSV.
pub fn parse_spreadsheet_ledger(content: &[u8]) -> Result<Ledger> {
    let cursor = Cursor::new(content);
    let mut workbook = open_workbook_auto_from_rs(cursor).map_err(|e| {
        ValidationError::InvalidInput(format!("Failed to open spreadsheet: {}", e))
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| {
            ValidationError::InvalidInput("Spreadsheet contains no sheets".to_string())
        })?
        .map_err(|e| ValidationError::InvalidInput(format!("Failed to read sheet: {}", e)))?;

    let mut rows_iter = range.rows();
    let headers: Vec<String> = match rows_iter.next() {
        Some(row) => row.iter().map(cell_to_string).collect(),
        None => {
            return Err(ValidationError::InvalidInput(
                "Spreadsheet is empty or contains no valid records".to_string(),
            )
            .into())
        }
    };

    let rows: Vec<Vec<String>> = rows_iter
        .map(|row| row.iter().map(cell_to_string).collect::<Vec<String>>())
        .filter(|row| !row.iter().all(|cell| cell.trim().is_empty()))
        .collect();

    Ok(Ledger::new(headers, rows))
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(_) => cell
            .as_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| cell.to_string()),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(_) => String::new(),
    }
}
