//! Request middleware: the SVG fallback rewrite and the fault boundary.

use std::panic::AssertUnwindSafe;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use futures::FutureExt;
use tracing::{error, warn};

use super::AppState;
use crate::fallback::SVG_CONTENT_TYPE;

/// Rewrites not-found responses into placeholder SVGs.
///
/// Runs after the inner service. Only a 404 whose content type is not
/// already `image/svg+xml` is rewritten; the type guard keeps a fallback
/// produced by an earlier stage from being processed twice.
pub async fn svg_fallback(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    let response = next.run(request).await;

    if response.status() != StatusCode::NOT_FOUND {
        return response;
    }
    if has_svg_content_type(&response) {
        return response;
    }

    warn!(url = %path, "File not found");
    state.pipeline.resolve(&path).into_response()
}

fn has_svg_content_type(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with(SVG_CONTENT_TYPE))
}

/// Outer recovery boundary.
///
/// A panic anywhere below becomes a plain-text 500 response instead of
/// tearing down the connection task; subsequent requests are unaffected.
pub async fn fault_boundary(request: Request, next: Next) -> Response {
    let url = request.uri().to_string();

    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => {
            error!(url = %url, error = %panic_message(panic.as_ref()), "Server error");
            Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
                .body(Body::from("500: Server error"))
                .unwrap()
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
