use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{Instrument, info};

/// Wrap each request in an `http.request` span and log its outcome
pub async fn log_requests(request: Request, next: Next) -> Response {
  let method = request.method().clone();
  let path = request.uri().path().to_string();
  let span = tracing::info_span!("http.request", method = %method, path = %path);

  let started = Instant::now();
  let response = next.run(request).instrument(span).await;
  info!(
    method = %method,
    path = %path,
    status = response.status().as_u16(),
    elapsed_ms = started.elapsed().as_millis() as u64,
    "request completed"
  );
  response
}
