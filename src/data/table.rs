//! CSV Table Module
//! Parses CSV text into a rectangular table with composite column keys.

use thiserror::Error;

/// Separator between the two header levels of a composite key.
pub const KEY_SEPARATOR: char = '-';

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to decode CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Empty input: no rows to parse")]
    EmptyInput,
    #[error("Missing header: need two header rows, found {0}")]
    MissingHeader(usize),
    #[error("Ragged CSV: record {record} has {found} fields, expected {expected}")]
    RaggedRow {
        record: usize,
        expected: usize,
        found: usize,
    },
}

/// A parsed CSV file: composite column keys plus rectangular data rows.
///
/// The first two non-blank lines are header rows; each composite key is
/// the two header values at that column joined with [`KEY_SEPARATOR`].
/// Every data row has exactly `keys().len()` fields, enforced when the
/// table is built.
#[derive(Debug, Clone)]
pub struct CsvTable {
    keys: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Parse CSV text into a table.
    ///
    /// Records whose fields are all blank are dropped wherever they occur,
    /// so trailing empty lines never cost a real row. The first record
    /// fixes the field count; any later mismatch fails with
    /// [`ParseError::RaggedRow`].
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut records: Vec<Vec<String>> = Vec::new();
        for result in reader.records() {
            let record = result?;
            if record.iter().all(|field| field.trim().is_empty()) {
                continue;
            }
            records.push(record.iter().map(|field| field.to_string()).collect());
        }

        if records.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if records.len() < 2 {
            return Err(ParseError::MissingHeader(records.len()));
        }

        let expected = records[0].len();
        for (idx, record) in records.iter().enumerate() {
            if record.len() != expected {
                return Err(ParseError::RaggedRow {
                    record: idx + 1,
                    expected,
                    found: record.len(),
                });
            }
        }

        let rows = records.split_off(2);
        let keys = records[0]
            .iter()
            .zip(records[1].iter())
            .map(|(top, sub)| format!("{}{}{}", top, KEY_SEPARATOR, sub))
            .collect();

        Ok(Self { keys, rows })
    }

    /// Composite column keys, one per column.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Data rows, header rows excluded.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.keys.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_keys_join_header_rows() {
        let table = CsvTable::parse("A,B\n1,2\nx,y\nx,z\n").unwrap();
        assert_eq!(table.keys(), &["A-1".to_string(), "B-2".to_string()]);
        assert_eq!(
            table.rows(),
            &[
                vec!["x".to_string(), "y".to_string()],
                vec!["x".to_string(), "z".to_string()],
            ]
        );
    }

    #[test]
    fn crlf_lines_parse_cleanly() {
        let table = CsvTable::parse("A,B\r\n1,2\r\nx,y\r\n").unwrap();
        assert_eq!(table.keys(), &["A-1".to_string(), "B-2".to_string()]);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn trailing_blank_lines_keep_last_row() {
        let table = CsvTable::parse("A,B\n1,2\nx,y\nx,z\n\n\n").unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[1], vec!["x".to_string(), "z".to_string()]);
    }

    #[test]
    fn interior_blank_lines_are_dropped() {
        let table = CsvTable::parse("A,B\n1,2\n\nx,y\n").unwrap();
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(CsvTable::parse(""), Err(ParseError::EmptyInput)));
        assert!(matches!(
            CsvTable::parse("\n \n"),
            Err(ParseError::EmptyInput)
        ));
    }

    #[test]
    fn single_header_row_is_an_error() {
        assert!(matches!(
            CsvTable::parse("A,B\n"),
            Err(ParseError::MissingHeader(1))
        ));
    }

    #[test]
    fn header_only_table_has_zero_rows() {
        let table = CsvTable::parse("A,B\n1,2\n").unwrap();
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn ragged_data_row_is_reported() {
        let err = CsvTable::parse("A,B\n1,2\nx\n").unwrap_err();
        match err {
            ParseError::RaggedRow {
                record,
                expected,
                found,
            } => {
                assert_eq!(record, 3);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn ragged_header_rows_are_reported() {
        assert!(matches!(
            CsvTable::parse("A,B\n1\n"),
            Err(ParseError::RaggedRow { record: 2, .. })
        ));
    }
}
