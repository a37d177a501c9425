//! Topsis Engine - Closeness scoring and ranking of alternatives.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{DecisionMatrix, Impact};

/// Errors reported by the engine. All are detected before any partial
/// result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopsisError {
    #[error(
        "Criteria count mismatch: matrix has {criteria} criteria, \
         got {weights} weights and {impacts} impacts"
    )]
    ShapeMismatch {
        criteria: usize,
        weights: usize,
        impacts: usize,
    },

    #[error("Criterion column {column} is all zeros and cannot be normalized")]
    DegenerateColumn { column: usize },

    #[error("No alternatives supplied")]
    EmptyInput,
}

/// Result of a TOPSIS evaluation, in the same row order as the input matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    /// Closeness score per alternative, each in `[0, 1]`.
    pub scores: Vec<f64>,
    /// Rank per alternative, a permutation of `1..=rows`. Rank 1 is the
    /// alternative with the highest score.
    pub ranks: Vec<usize>,
}

/// TOPSIS computation functions.
pub struct TopsisEngine;

impl TopsisEngine {
    /// Scores and ranks each alternative by its closeness to the ideal
    /// solution.
    ///
    /// # Algorithm
    ///
    /// 1. Divide each column by its Euclidean norm (unit vectors remove
    ///    scale differences between criteria).
    /// 2. Multiply each column by its raw weight (weights are used as
    ///    given, never re-normalized).
    /// 3. Per column, take the max as ideal-best and min as ideal-worst
    ///    for benefit criteria; swapped for cost criteria.
    /// 4. Per row, compute the Euclidean distance to both ideal points.
    /// 5. score = dist_worst / (dist_best + dist_worst).
    /// 6. Rank by score descending, rank 1 for the highest score.
    ///
    /// Ties in score are broken by original row order: the lower row index
    /// receives the better rank. This is a deliberate, deterministic choice.
    ///
    /// # Edge Cases
    ///
    /// - A row equidistant-zero from both ideal points (all rows identical
    ///   on every weighted-normalized criterion) scores 0.5. Not an error.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if the matrix has no rows
    /// - `ShapeMismatch` if weights or impacts don't match the column count
    /// - `DegenerateColumn` if a column is entirely zero
    pub fn evaluate(
        matrix: &DecisionMatrix,
        weights: &[f64],
        impacts: &[Impact],
    ) -> Result<Ranking, TopsisError> {
        if matrix.is_empty() {
            return Err(TopsisError::EmptyInput);
        }

        let rows = matrix.row_count();
        let cols = matrix.col_count();
        if weights.len() != cols || impacts.len() != cols {
            return Err(TopsisError::ShapeMismatch {
                criteria: cols,
                weights: weights.len(),
                impacts: impacts.len(),
            });
        }

        let mut data = matrix.to_data();

        // 1. Vector normalization, column by column.
        for j in 0..cols {
            let norm = (0..rows)
                .map(|i| data[i * cols + j].powi(2))
                .sum::<f64>()
                .sqrt();
            if norm == 0.0 {
                return Err(TopsisError::DegenerateColumn { column: j });
            }
            for i in 0..rows {
                data[i * cols + j] /= norm;
            }
        }

        // 2. Weighting.
        for i in 0..rows {
            for j in 0..cols {
                data[i * cols + j] *= weights[j];
            }
        }

        // 3. Ideal best and ideal worst per criterion.
        let mut ideal_best = vec![0.0; cols];
        let mut ideal_worst = vec![0.0; cols];
        for j in 0..cols {
            let mut max = f64::NEG_INFINITY;
            let mut min = f64::INFINITY;
            for i in 0..rows {
                let v = data[i * cols + j];
                max = max.max(v);
                min = min.min(v);
            }
            match impacts[j] {
                Impact::Benefit => {
                    ideal_best[j] = max;
                    ideal_worst[j] = min;
                }
                Impact::Cost => {
                    ideal_best[j] = min;
                    ideal_worst[j] = max;
                }
            }
        }

        // 4. Separation distances, then 5. closeness score.
        let mut scores = Vec::with_capacity(rows);
        for i in 0..rows {
            let mut dist_best = 0.0;
            let mut dist_worst = 0.0;
            for j in 0..cols {
                let v = data[i * cols + j];
                dist_best += (v - ideal_best[j]).powi(2);
                dist_worst += (v - ideal_worst[j]).powi(2);
            }
            dist_best = dist_best.sqrt();
            dist_worst = dist_worst.sqrt();

            let total = dist_best + dist_worst;
            // Row coincides with both ideal points: every alternative is
            // indistinguishable on this row, define the score as neutral.
            let score = if total == 0.0 { 0.5 } else { dist_worst / total };
            scores.push(score);
        }

        // 6. Ranking: stable descending sort so equal scores keep original
        // row order.
        let mut order: Vec<usize> = (0..rows).collect();
        order.sort_by(|&a, &b| {
            scores[b]
                .partial_cmp(&scores[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut ranks = vec![0; rows];
        for (position, &row) in order.iter().enumerate() {
            ranks[row] = position + 1;
        }

        Ok(Ranking { scores, ranks })
    }
}
