//! Fallback/placeholder resolution pipeline.
//!
//! Runs only after normal static-file resolution reports not-found. The
//! pipeline first tries the dynamic logo matcher; on a match the template
//! is rendered with the captured name. Otherwise the suffix classifier
//! picks one of the three static payloads. Every stage is a pure function
//! over immutable inputs.

pub mod classifier;
pub mod logo;
pub mod pipeline;
pub mod template;

pub use classifier::{classify, PlaceholderKind};
pub use logo::{LogoMatcher, LogoToken};
pub use pipeline::{FallbackPipeline, RenderedPlaceholder, SVG_CONTENT_TYPE};
