//! HTTP routes for the ranking endpoint.

use axum::{routing::post, Router};

use super::handlers::{rank_csv, RankHandlers};

/// Creates the ranking router.
pub fn topsis_routes(handlers: RankHandlers) -> Router {
    Router::new().route("/", post(rank_csv)).with_state(handlers)
}
