//! CSV adapters - Tabular input parsing and result serialization.

mod table;

pub use table::{CsvError, CsvTable};
