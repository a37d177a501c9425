//! HTTP adapters - REST API implementations.

pub mod topsis;

// Re-export key types for convenience
pub use topsis::topsis_routes;
pub use topsis::RankHandlers;
