//! Command handlers.

mod rank_table;

pub use rank_table::{RankTableCommand, RankTableError, RankTableHandler, RankTableResult};
