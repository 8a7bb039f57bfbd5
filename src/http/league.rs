use axum::Json;
use axum::extract::State;

use super::SharedStore;
use crate::league::PlayerRecord;
use crate::store::StoreError;

/// GET /league
pub async fn get_league(
  State(store): State<SharedStore>,
) -> Result<Json<Vec<PlayerRecord>>, StoreError> {
  Ok(Json(store.league().await?))
}
