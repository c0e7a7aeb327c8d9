//! Fallback asset server.
//!
//! Serves files from a static root and answers every miss with a
//! placeholder SVG instead of a bare error: a template rendered with the
//! requested name for `/logos/.../<name>-ar21.svg` paths, one of three
//! fixed payloads (wide, icon, full) selected by filename suffix for
//! everything else.

pub mod assets;
pub mod config;
pub mod errors;
pub mod fallback;
pub mod web;
