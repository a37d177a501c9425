//! Domain layer - pure decision-analysis logic.

pub mod analysis;
