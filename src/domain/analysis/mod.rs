//! Analysis Module - Pure domain services for multi-criteria ranking.
//!
//! This module contains stateless functions that operate on in-memory
//! numeric data to rank alternatives.
//!
//! # Components
//!
//! - `DecisionMatrix` - Rectangular alternatives x criteria grid
//! - `Impact` - Per-criterion direction (benefit or cost)
//! - `TopsisEngine` - Normalization, weighting, ideal points, ranking
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take
//! caller-supplied data as input and return computed results. No ports or
//! adapters needed since there's no I/O or external dependencies.

mod decision_matrix;
mod topsis;

// Re-export all public types
pub use decision_matrix::{DecisionMatrix, Impact, MatrixError};
pub use topsis::{Ranking, TopsisEngine, TopsisError};
