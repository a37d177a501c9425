//! Decision Matrix - Core data structure for TOPSIS analysis.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Direction of preference for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    /// Higher raw values are preferred (e.g., quality score).
    Benefit,
    /// Lower raw values are preferred (e.g., price).
    Cost,
}

impl Impact {
    /// Parses an impact from its symbol form (`+` for benefit, `-` for cost).
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Impact::Benefit),
            "-" => Some(Impact::Cost),
            _ => None,
        }
    }

    /// Returns the symbol form.
    pub fn symbol(&self) -> &'static str {
        match self {
            Impact::Benefit => "+",
            Impact::Cost => "-",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Errors that occur during matrix construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("Row {row} has {actual} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Cell at row {row}, column {column} is not a finite number")]
    NonFinite { row: usize, column: usize },
}

/// A rectangular grid of finite real numbers: alternatives (rows) scored
/// on criteria (columns).
///
/// The identifier column of the source table is not part of the matrix;
/// dropping it is the input adapter's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    rows: usize,
    cols: usize,
    /// Row-major cell data, `rows * cols` entries.
    data: Vec<f64>,
}

impl DecisionMatrix {
    /// Builds a matrix from row vectors.
    ///
    /// # Errors
    ///
    /// Returns `MatrixError::RaggedRow` if any row length differs from the
    /// first, or `MatrixError::NonFinite` for NaN or infinite cells.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);

        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MatrixError::RaggedRow {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
            for (j, &cell) in row.iter().enumerate() {
                if !cell.is_finite() {
                    return Err(MatrixError::NonFinite { row: i, column: j });
                }
                data.push(cell);
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Returns the number of alternatives.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Returns the number of criteria.
    pub fn col_count(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        self.data[row * self.cols + col]
    }

    /// Returns a copy of the row-major cell data.
    pub(crate) fn to_data(&self) -> Vec<f64> {
        self.data.clone()
    }
}
