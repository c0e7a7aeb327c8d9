//! Per-request fallback resolution.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use super::classifier::{self, PlaceholderKind};
use super::logo::LogoMatcher;
use super::template;
use crate::assets::PlaceholderAssets;

/// Media type carried by every placeholder response.
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Decides which placeholder body answers a failed resolution.
///
/// Holds only read-only state (the loaded payloads and the compiled logo
/// pattern), so a single pipeline is shared by all requests.
pub struct FallbackPipeline {
    assets: Arc<PlaceholderAssets>,
    matcher: LogoMatcher,
}

/// The final placeholder response for one request.
pub struct RenderedPlaceholder {
    pub body: String,
    pub content_type: &'static str,
    pub status: StatusCode,
}

impl FallbackPipeline {
    pub fn new(assets: Arc<PlaceholderAssets>) -> Self {
        Self {
            assets,
            matcher: LogoMatcher::new(),
        }
    }

    /// Resolve a not-found path to a placeholder.
    ///
    /// Dynamic logo requests get a rendered template; everything else falls
    /// through to the suffix classifier. The status stays not-found either
    /// way: the placeholder is a visual substitute for the resource, not
    /// the resource itself.
    pub fn resolve(&self, path: &str) -> RenderedPlaceholder {
        let body = match self.matcher.capture(path) {
            Some(token) => template::render(
                self.assets.template(),
                &token.name,
                &token.font_size_with_unit(),
            ),
            None => match classifier::classify(path) {
                PlaceholderKind::Wide => self.assets.wide().to_string(),
                PlaceholderKind::Icon => self.assets.icon().to_string(),
                PlaceholderKind::Full => self.assets.full().to_string(),
            },
        };

        RenderedPlaceholder {
            body,
            content_type: SVG_CONTENT_TYPE,
            status: StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for RenderedPlaceholder {
    fn into_response(self) -> Response {
        Response::builder()
            .status(self.status)
            .header(header::CONTENT_TYPE, self.content_type)
            .body(Body::from(self.body))
            .unwrap()
    }
}
