use std::sync::OnceLock;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use regex::Regex;
use serde::Deserialize;
use serde_json::json;
use sysinfo::System;

use super::AppState;

/// Root endpoint: a short informational pointer at the project home page.
/// The server itself has nothing to show; its purpose is answering paths
/// that do not exist.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    format!("would redirect to {}", state.config.web.home_page)
}

#[derive(Debug, Deserialize)]
pub struct StatusParams {
    pub callback: Option<String>,
}

/// Diagnostics endpoint: a JSON dump of host and process counters.
///
/// A `callback` query parameter that is a syntactically valid identifier
/// wraps the payload as JSONP; anything else is ignored and plain JSON is
/// returned.
pub async fn status(
    State(state): State<AppState>,
    Query(params): Query<StatusParams>,
) -> Response {
    let mut sys = System::new();
    sys.refresh_memory();
    sys.refresh_cpu();
    sys.refresh_processes();

    let load = System::load_average();
    let process = sysinfo::get_current_pid().ok().and_then(|pid| sys.process(pid));

    let payload = json!({
        "success": true,
        "message": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "lastmod": std::env::var("LASTMOD").ok(),
        "commit": std::env::var("COMMIT").ok(),
        "os": {
            "hostname": System::host_name(),
            "name": System::name(),
            "version": System::os_version(),
            "kernel": System::kernel_version(),
            "arch": std::env::consts::ARCH,
            "uptime": System::uptime(),
            "loadavg": [load.one, load.five, load.fifteen],
            "total_memory": sys.total_memory(),
            "available_memory": sys.available_memory(),
            "cpus": sys.cpus().len(),
        },
        "process": {
            "pid": process.map(|p| p.pid().as_u32()),
            "memory": process.map(|p| p.memory()),
            "uptime": state.started_at.elapsed().as_secs(),
        },
    });

    if let Some(callback) = params.callback.as_deref() {
        if is_valid_callback(callback) {
            return Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "application/javascript")
                .body(Body::from(format!("{callback}({payload});")))
                .unwrap();
        }
    }

    Json(payload).into_response()
}

/// A callback is only honored when it is a syntactically valid JavaScript
/// identifier. The pattern is compiled once and reused across requests.
fn is_valid_callback(callback: &str) -> bool {
    static IDENTIFIER: OnceLock<Regex> = OnceLock::new();
    IDENTIFIER
        .get_or_init(|| {
            Regex::new(r"^[$A-Za-z_][0-9A-Za-z_$]*$").expect("callback pattern is valid")
        })
        .is_match(callback)
}
