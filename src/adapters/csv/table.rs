//! CSV table adapter - parses uploaded tables and serializes ranked output.
//!
//! The first column is treated as a non-numeric alternative identifier and
//! is excluded from the criteria matrix. Result columns are appended in
//! original row order, preserving every original column.

use thiserror::Error;

use crate::domain::analysis::{DecisionMatrix, MatrixError};

/// Header of the appended score column.
pub const SCORE_COLUMN: &str = "Topsis Score";

/// Header of the appended rank column.
pub const RANK_COLUMN: &str = "Rank";

/// Errors that occur while parsing or converting an uploaded table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CsvError {
    #[error("CSV input is empty")]
    Empty,

    #[error("Row {row} has {actual} fields, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("CSV must have at least 3 columns, got {found}")]
    TooFewColumns { found: usize },

    #[error("Value '{value}' at row {row}, column '{column}' is not a number")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Unterminated quoted field starting at row {row}")]
    UnterminatedQuote { row: usize },

    #[error("Result column count {results} does not match row count {rows}")]
    ResultLengthMismatch { rows: usize, results: usize },
}

/// An in-memory CSV table: a header row plus data rows of string fields.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Parses CSV text into a table.
    ///
    /// Handles quoted fields with embedded commas and doubled quotes.
    /// Requires a header row, at least 3 columns (identifier plus two or
    /// more criteria), and rectangular rows.
    pub fn parse(input: &str) -> Result<Self, CsvError> {
        let mut records = Vec::new();
        for (line_no, line) in input.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            records.push(split_fields(line, line_no)?);
        }

        let mut records = records.into_iter();
        let headers = records.next().ok_or(CsvError::Empty)?;
        if headers.len() < 3 {
            return Err(CsvError::TooFewColumns {
                found: headers.len(),
            });
        }

        let mut rows = Vec::new();
        for (i, record) in records.enumerate() {
            if record.len() != headers.len() {
                return Err(CsvError::RaggedRow {
                    row: i,
                    expected: headers.len(),
                    actual: record.len(),
                });
            }
            rows.push(record);
        }

        Ok(Self { headers, rows })
    }

    /// Returns the column headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Builds the criteria matrix by dropping the identifier column and
    /// parsing every remaining cell as a float.
    pub fn criteria_matrix(&self) -> Result<DecisionMatrix, CsvError> {
        let mut numeric_rows = Vec::with_capacity(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            let mut cells = Vec::with_capacity(row.len() - 1);
            for (j, value) in row.iter().enumerate().skip(1) {
                let parsed: f64 = value.trim().parse().map_err(|_| CsvError::InvalidNumber {
                    row: i,
                    column: self.headers[j].clone(),
                    value: value.clone(),
                })?;
                if !parsed.is_finite() {
                    return Err(CsvError::InvalidNumber {
                        row: i,
                        column: self.headers[j].clone(),
                        value: value.clone(),
                    });
                }
                cells.push(parsed);
            }
            numeric_rows.push(cells);
        }

        // Rectangularity and finiteness were established above; map any
        // residual construction error back into table coordinates.
        DecisionMatrix::from_rows(numeric_rows).map_err(|e| match e {
            MatrixError::RaggedRow {
                row,
                expected,
                actual,
            } => CsvError::RaggedRow {
                row,
                expected,
                actual,
            },
            MatrixError::NonFinite { row, column } => CsvError::InvalidNumber {
                row,
                column: self
                    .headers
                    .get(column + 1)
                    .cloned()
                    .unwrap_or_default(),
                value: String::new(),
            },
        })
    }

    /// Appends the score and rank columns, preserving row order.
    pub fn append_results(&mut self, scores: &[f64], ranks: &[usize]) -> Result<(), CsvError> {
        if scores.len() != self.rows.len() || ranks.len() != self.rows.len() {
            return Err(CsvError::ResultLengthMismatch {
                rows: self.rows.len(),
                results: scores.len().min(ranks.len()),
            });
        }

        self.headers.push(SCORE_COLUMN.to_string());
        self.headers.push(RANK_COLUMN.to_string());
        for (row, (score, rank)) in self.rows.iter_mut().zip(scores.iter().zip(ranks)) {
            row.push(score.to_string());
            row.push(rank.to_string());
        }
        Ok(())
    }

    /// Serializes the table back to CSV text, quoting fields that contain
    /// commas, quotes, or line breaks.
    pub fn to_csv_string(&self) -> String {
        let mut out = String::new();
        write_record(&mut out, &self.headers);
        for row in &self.rows {
            write_record(&mut out, row);
        }
        out
    }
}

fn write_record(out: &mut String, fields: &[String]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if field.contains([',', '"', '\n', '\r']) {
            out.push('"');
            out.push_str(&field.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
    out.push('\n');
}

/// Splits one CSV line into fields, honoring quotes.
fn split_fields(line: &str, row: usize) -> Result<Vec<String>, CsvError> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(c),
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => {
                    fields.push(std::mem::take(&mut field));
                }
                '\r' => {}
                _ => field.push(c),
            }
        }
    }

    if in_quotes {
        return Err(CsvError::UnterminatedQuote { row });
    }

    fields.push(field);
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Model,Price,Storage,Camera\nM1,250,16,12\nM2,200,16,8\nM3,300,32,16\n";

    #[test]
    fn parse_reads_headers_and_rows() {
        let table = CsvTable::parse(SAMPLE).unwrap();
        assert_eq!(table.headers(), ["Model", "Price", "Storage", "Camera"]);
        assert_eq!(table.row_count(), 3);
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!(CsvTable::parse(""), Err(CsvError::Empty));
        assert_eq!(CsvTable::parse("\n\n"), Err(CsvError::Empty));
    }

    #[test]
    fn parse_rejects_too_few_columns() {
        let result = CsvTable::parse("Model,Price\nM1,250\n");
        assert_eq!(result, Err(CsvError::TooFewColumns { found: 2 }));
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let result = CsvTable::parse("Model,Price,Storage\nM1,250\n");
        assert_eq!(
            result,
            Err(CsvError::RaggedRow {
                row: 0,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn parse_handles_quoted_fields() {
        let table =
            CsvTable::parse("Model,Price,Notes\n\"M1, deluxe\",250,\"said \"\"hi\"\"\"\n").unwrap();
        assert_eq!(table.rows[0][0], "M1, deluxe");
        assert_eq!(table.rows[0][2], "said \"hi\"");
    }

    #[test]
    fn parse_rejects_unterminated_quote() {
        let result = CsvTable::parse("Model,Price,Storage\n\"M1,250,16\n");
        assert_eq!(result, Err(CsvError::UnterminatedQuote { row: 1 }));
    }

    #[test]
    fn parse_tolerates_crlf_line_endings() {
        let table = CsvTable::parse("Model,Price,Storage\r\nM1,250,16\r\n").unwrap();
        assert_eq!(table.rows[0], ["M1", "250", "16"]);
    }

    #[test]
    fn criteria_matrix_drops_identifier_column() {
        let table = CsvTable::parse(SAMPLE).unwrap();
        let matrix = table.criteria_matrix().unwrap();
        assert_eq!(matrix.row_count(), 3);
        assert_eq!(matrix.col_count(), 3);
        assert_eq!(matrix.get(0, 0), 250.0);
        assert_eq!(matrix.get(2, 2), 16.0);
    }

    #[test]
    fn criteria_matrix_rejects_non_numeric_cell() {
        let table = CsvTable::parse("Model,Price,Storage\nM1,cheap,16\n").unwrap();
        let result = table.criteria_matrix();
        assert_eq!(
            result,
            Err(CsvError::InvalidNumber {
                row: 0,
                column: "Price".to_string(),
                value: "cheap".to_string()
            })
        );
    }

    #[test]
    fn criteria_matrix_rejects_non_finite_cell() {
        let table = CsvTable::parse("Model,Price,Storage\nM1,inf,16\n").unwrap();
        assert!(matches!(
            table.criteria_matrix(),
            Err(CsvError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn append_results_adds_named_columns() {
        let mut table = CsvTable::parse(SAMPLE).unwrap();
        table
            .append_results(&[0.25, 0.5, 1.0], &[3, 2, 1])
            .unwrap();

        assert_eq!(table.headers().last().unwrap(), RANK_COLUMN);
        assert_eq!(table.headers()[table.headers().len() - 2], SCORE_COLUMN);
        assert_eq!(table.rows[0][4], "0.25");
        assert_eq!(table.rows[0][5], "3");
        assert_eq!(table.rows[2][5], "1");
    }

    #[test]
    fn append_results_rejects_length_mismatch() {
        let mut table = CsvTable::parse(SAMPLE).unwrap();
        let result = table.append_results(&[0.5], &[1]);
        assert_eq!(
            result,
            Err(CsvError::ResultLengthMismatch {
                rows: 3,
                results: 1
            })
        );
    }

    #[test]
    fn to_csv_string_round_trips() {
        let table = CsvTable::parse(SAMPLE).unwrap();
        let text = table.to_csv_string();
        let reparsed = CsvTable::parse(&text).unwrap();
        assert_eq!(table, reparsed);
    }

    #[test]
    fn to_csv_string_quotes_fields_with_commas() {
        let table =
            CsvTable::parse("Model,Price,Notes\n\"M1, deluxe\",250,plain\n").unwrap();
        let text = table.to_csv_string();
        assert!(text.contains("\"M1, deluxe\""));
    }
}
