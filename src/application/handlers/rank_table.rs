//! RankTable - Command handler for ranking an uploaded table.

use std::sync::Arc;

use thiserror::Error;

use crate::adapters::csv::{CsvError, CsvTable};
use crate::domain::analysis::{Impact, TopsisEngine, TopsisError};
use crate::ports::{NotifyError, ResultAttachment, ResultNotifier};

/// Filename of the delivered attachment.
const RESULT_FILENAME: &str = "result.csv";

/// Command to rank a CSV table and deliver the result.
///
/// Weights and impacts arrive already parsed; text-format validation is the
/// transport adapter's job.
#[derive(Debug, Clone)]
pub struct RankTableCommand {
    pub csv_text: String,
    pub weights: Vec<f64>,
    pub impacts: Vec<Impact>,
    pub recipient: String,
}

/// Result of a successful ranking run.
#[derive(Debug, Clone)]
pub struct RankTableResult {
    pub alternatives_ranked: usize,
}

/// Errors from the ranking pipeline. Computation failures and delivery
/// failures stay distinct so callers can report them separately.
#[derive(Debug, Error)]
pub enum RankTableError {
    #[error("Invalid table: {0}")]
    InvalidTable(#[from] CsvError),

    #[error("Computation failed: {0}")]
    Computation(#[from] TopsisError),

    #[error("Result could not be delivered: {0}")]
    Delivery(#[from] NotifyError),
}

/// Handler for ranking uploaded tables.
pub struct RankTableHandler {
    notifier: Arc<dyn ResultNotifier>,
}

impl RankTableHandler {
    pub fn new(notifier: Arc<dyn ResultNotifier>) -> Self {
        Self { notifier }
    }

    pub async fn handle(&self, cmd: RankTableCommand) -> Result<RankTableResult, RankTableError> {
        // 1. Parse the table and build the criteria matrix.
        let mut table = CsvTable::parse(&cmd.csv_text)?;
        let matrix = table.criteria_matrix()?;

        // 2. Score and rank.
        let ranking = TopsisEngine::evaluate(&matrix, &cmd.weights, &cmd.impacts)?;

        tracing::info!(
            alternatives = matrix.row_count(),
            criteria = matrix.col_count(),
            "ranked uploaded table"
        );

        // 3. Append result columns and serialize.
        table.append_results(&ranking.scores, &ranking.ranks)?;
        let attachment =
            ResultAttachment::csv(RESULT_FILENAME, table.to_csv_string().into_bytes());

        // 4. Deliver.
        self.notifier.deliver(&cmd.recipient, &attachment).await?;

        Ok(RankTableResult {
            alternatives_ranked: matrix.row_count(),
        })
    }
}
