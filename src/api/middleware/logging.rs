use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

/// Emits one structured line per handled request. Server errors get a
/// warning so completion-service outages stand out in the log stream.
pub async fn request_logger(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

    if response.status().is_server_error() {
        warn!(
            target: "doc_chat::http",
            %method,
            path,
            status,
            latency_ms,
            "request failed"
        );
    } else {
        info!(
            target: "doc_chat::http",
            %method,
            path,
            status,
            latency_ms,
            "request handled"
        );
    }

    response
}
