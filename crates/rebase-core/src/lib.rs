//! Region-scoped URL rebasing for CSS stylesheets.
//!
//! # Scope
//!
//! This crate implements the algorithmic core of the `cssrebase` transform:
//!
//! - **Marker grammar** — recognizing `region <format><path>` and
//!   `endregion <format><path>` directives inside CSS comments, with a
//!   configurable format token (default `cssRebase:`).
//!
//! - **Region extraction** — pairing start and end markers with a stack
//!   discipline into resolved `(path, start line, end line)` regions.
//!
//! - **URL rebasing** — picking the most specific enclosing region for each
//!   `url(...)` reference by source line and joining the region's path with
//!   the reference's relative path.
//!
//! CSS parsing and printing are *not* implemented here. The core consumes an
//! injected [`CssEngine`] capability, which keeps the algorithm testable
//! against a minimal in-memory document fixture. The `rebase-css` crate
//! provides the default engine.
//!
//! # Invocation model
//!
//! One [`Rebaser::transform`] call processes one complete, independent CSS
//! document. Region sets never outlive an invocation and no state is shared
//! between invocations.

/// The injected CSS engine capability and its node views.
pub mod engine;
/// Error taxonomy for a transform invocation.
pub mod error;
/// Region marker grammar.
pub mod marker;
/// The transform front door: region extraction plus URL rewriting.
pub mod rebase;
/// Resolved regions and enclosing-region selection.
pub mod region;

// Re-exports for convenience
pub use engine::{CommentNode, CssEngine, UrlRef};
pub use error::{ParseError, TransformError};
pub use marker::{DEFAULT_FORMAT, Marker, MarkerGrammar};
pub use rebase::Rebaser;
pub use region::{Region, enclosing_region, extract_regions};
