//! Uploaded ledger ingestion.
//!
//! A [`Ledger`] is the row/column view of one uploaded tabular file
//! (transactions or payments). Parsing is format-specific (`csv`,
//! `spreadsheet`); everything downstream works on the `Ledger` alone.

pub mod csv;
pub mod model;
pub mod spreadsheet;

pub use csv::parse_csv_ledger;
pub use model::{coerce_numeric, parse_ledger_date, Ledger};
pub use spreadsheet::{parse_ledger_file, parse_spreadsheet_ledger, LedgerFormat};
