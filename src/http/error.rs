use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::store::StoreError;

impl IntoResponse for StoreError {
  fn into_response(self) -> Response {
    error!("Store failure: {}", self);
    (StatusCode::INTERNAL_SERVER_ERROR, "internal store error").into_response()
  }
}
