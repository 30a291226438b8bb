//! Request id tagging
//!
//! Every request runs inside a span carrying its id, and the id is echoed on
//! the response so clients can correlate logs.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

/// Header read from the request and written to the response
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tag each request with an id, reusing the caller's `x-request-id` if sent
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
    );
    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    let status = response.status().as_u16();
    let elapsed_ms = start.elapsed().as_millis();
    if response.status().is_server_error() {
        warn!(request_id = %request_id, %method, %path, status, elapsed_ms, "Request failed");
    } else {
        info!(request_id = %request_id, %method, %path, status, elapsed_ms, "Request served");
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(middleware::from_fn(request_id_middleware))
    }

    #[tokio::test]
    async fn test_generates_request_id() {
        let request = axum::http::Request::get("/ping").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();

        let id = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
        assert!(Uuid::parse_str(id).is_ok(), "not a uuid: {}", id);
    }

    #[tokio::test]
    async fn test_echoes_caller_request_id() {
        let request = axum::http::Request::get("/ping")
            .header(REQUEST_ID_HEADER, "trace-42")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.headers()[REQUEST_ID_HEADER], "trace-42");
    }
}
