//! HTTP interface
//!
//! Route table, handlers and middleware for the score-tracking API.

pub mod error;
pub mod league;
pub mod players;
pub mod trace;

use std::sync::Arc;

use axum::Router;
use axum::middleware::from_fn;
use axum::routing::get;

use crate::store::PlayerStore;

/// Store handle shared by every handler
pub type SharedStore = Arc<dyn PlayerStore>;

/// Build the route table
///
/// | Path              | Method | Handler                 |
/// |-------------------|--------|-------------------------|
/// | `/players/{name}` | GET    | [`players::get_score`]  |
/// | `/players/{name}` | POST   | [`players::record_win`] |
/// | `/league`         | GET    | [`league::get_league`]  |
///
/// Unknown paths answer 404, known paths with another method answer 405.
pub fn router(store: SharedStore) -> Router {
  Router::new()
    .route(
      "/players/{name}",
      get(players::get_score).post(players::record_win),
    )
    .route("/league", get(league::get_league))
    .layer(from_fn(trace::log_requests))
    .with_state(store)
}
