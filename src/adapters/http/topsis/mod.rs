//! HTTP adapter for the ranking endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, RankResponse};
pub use handlers::RankHandlers;
pub use routes::topsis_routes;
