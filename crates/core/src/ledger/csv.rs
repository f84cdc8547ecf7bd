//! CSV ledger reader.
//!
//! Uploads come from whatever spreadsheet tool a partner exports with, so
//! the reader auto-detects the delimiter, tolerates a UTF-8 BOM and lossy
//! encodings, and accepts ragged rows (normalized by [`Ledger::new`]).

use csv::{ReaderBuilder, Terminator};
use log::warn;

use crate::errors::{Error, ValidationError};
use crate::ledger::model::Ledger;
use crate::Result;

/// Parse raw CSV bytes into a [`Ledger`].
///
/// The first non-empty record is the header row; all remaining records are
/// data rows. A file with no records at all is a validation error (a file
/// with a header row but no data rows is not).
pub fn parse_csv_ledger(content: &[u8]) -> Result<Ledger> {
    let content_str = decode_content(content);
    let delimiter = detect_delimiter(&content_str);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false) // headers handled manually
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(content_str.as_bytes());

    let mut records: Vec<Vec<String>> = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                let row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
                if row.iter().all(|cell| cell.trim().is_empty()) {
                    continue;
                }
                records.push(row);
            }
            Err(e) => {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Failed to parse row {}: {}",
                    idx + 1,
                    e
                ))));
            }
        }
    }

    if records.is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "CSV file is empty or contains no valid records".to_string(),
        )));
    }

    let headers = records.remove(0);
    Ok(Ledger::new(headers, records))
}

/// Decode content bytes to UTF-8, stripping a BOM if present.
fn decode_content(content: &[u8]) -> String {
    // UTF-8 BOM (EF BB BF)
    let content_without_bom =
        if content.len() >= 3 && content[0] == 0xEF && content[1] == 0xBB && content[2] == 0xBF {
            &content[3..]
        } else {
            content
        };

    match std::str::from_utf8(content_without_bom) {
        Ok(s) => s.to_string(),
        Err(e) => {
            warn!(
                "Invalid UTF-8 in uploaded CSV at byte {}; replacing bad characters",
                e.valid_up_to()
            );
            String::from_utf8_lossy(content_without_bom).into_owned()
        }
    }
}

/// Pick the delimiter whose column counts are most consistent across the
/// first lines of the file.
fn detect_delimiter(content: &str) -> u8 {
    let delimiters = [b',', b';', b'\t'];
    let mut best_delimiter = b',';
    let mut best_score = 0usize;

    for delim in delimiters {
        let score = score_delimiter(content, delim as char);
        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    best_delimiter
}

/// Score a delimiter by occurrences-per-line times line consistency.
fn score_delimiter(content: &str, delimiter: char) -> usize {
    let lines: Vec<&str> = content.lines().take(10).collect();
    if lines.is_empty() {
        return 0;
    }

    let counts: Vec<usize> = lines
        .iter()
        .map(|line| line.matches(delimiter).count())
        .collect();

    let first_count = counts[0];
    let consistent_count = counts.iter().filter(|&&c| c == first_count).count();

    if first_count == 0 {
        0
    } else {
        first_count * consistent_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_csv() {
        let content = b"date,revenue,cost\n2024-01-05,100,40\n2024-02-05,120,50";
        let ledger = parse_csv_ledger(content).unwrap();

        assert_eq!(ledger.headers(), &["date", "revenue", "cost"]);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.rows()[0], vec!["2024-01-05", "100", "40"]);
    }

    #[test]
    fn test_parse_semicolon_delimiter() {
        let content = b"date;revenue;cost\n2024-01-05;100;40";
        let ledger = parse_csv_ledger(content).unwrap();

        assert_eq!(ledger.headers(), &["date", "revenue", "cost"]);
        assert_eq!(ledger.rows()[0], vec!["2024-01-05", "100", "40"]);
    }

    #[test]
    fn test_parse_tab_delimiter() {
        let content = b"date\trevenue\tcost\n2024-01-05\t100\t40";
        let ledger = parse_csv_ledger(content).unwrap();

        assert_eq!(ledger.headers(), &["date", "revenue", "cost"]);
    }

    #[test]
    fn test_utf8_bom_stripped() {
        let content = b"\xEF\xBB\xBFdate,revenue\n2024-01-05,100";
        let ledger = parse_csv_ledger(content).unwrap();

        assert_eq!(ledger.headers(), &["date", "revenue"]);
    }

    #[test]
    fn test_quoted_fields() {
        let content = b"name,note\nAcme,\"Hello, World\"";
        let ledger = parse_csv_ledger(content).unwrap();

        assert_eq!(ledger.rows()[0], vec!["Acme", "Hello, World"]);
    }

    #[test]
    fn test_empty_rows_skipped() {
        let content = b"date,revenue\n2024-01-05,100\n\n2024-02-05,120";
        let ledger = parse_csv_ledger(content).unwrap();

        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_header_only_is_valid_and_empty() {
        let content = b"date,revenue,cost\n";
        let ledger = parse_csv_ledger(content).unwrap();

        assert!(ledger.is_empty());
        assert_eq!(ledger.headers(), &["date", "revenue", "cost"]);
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let err = parse_csv_ledger(b"").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_ragged_rows_normalized() {
        let content = b"a,b,c\n1,2\n3,4,5,6";
        let ledger = parse_csv_ledger(content).unwrap();

        assert_eq!(ledger.rows()[0], vec!["1", "2", ""]);
        assert_eq!(ledger.rows()[1], vec!["3", "4", "5"]);
    }
}
