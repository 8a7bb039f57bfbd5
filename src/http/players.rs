use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use super::SharedStore;
use crate::store::StoreError;

/// GET /players/{name}
///
/// Answers the score as plain text. A score of zero means the player never
/// won, which is reported as 404.
pub async fn get_score(
  State(store): State<SharedStore>,
  Path(name): Path<String>,
) -> Result<Response, StoreError> {
  let score = store.get_score(&name).await?;
  debug!("Score for {}: {}", name, score);

  if score == 0 {
    return Ok(StatusCode::NOT_FOUND.into_response());
  }
  Ok(score.to_string().into_response())
}

/// POST /players/{name}
pub async fn record_win(
  State(store): State<SharedStore>,
  Path(name): Path<String>,
) -> Result<StatusCode, StoreError> {
  store.record_win(&name).await?;
  debug!("Recorded win for {}", name);
  Ok(StatusCode::ACCEPTED)
}
