//! Default CSS engine for the `cssrebase` transform.
//!
//! # Scope
//!
//! This crate implements the parse/traverse/serialize capability consumed by
//! `rebase-core`:
//!
//! - **Scanner** — a lossless tokenizer that splits a stylesheet into
//!   verbatim spans, comment nodes, and `url(...)` tokens, tracking 1-based
//!   source lines ([§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization),
//!   reduced to the token classes the transform needs).
//!
//! - **Structural validation** — unterminated comments, unterminated or
//!   newline-broken strings, unterminated `url(` tokens, and unbalanced
//!   curly braces are rejected as parse errors.
//!
//! - **Serialization** — nodes print back in order; a document with no
//!   rewrites serializes byte-identically to its input.
//!
//! # Not implemented
//!
//! Full CSS grammar parsing (rules, selectors, declarations). The transform
//! only needs comments and URL tokens with positions, so everything else is
//! carried through as raw text.

/// The engine wiring onto `rebase-core`'s capability trait.
pub mod engine;
/// Document representation and serialization.
pub mod node;
/// The lossless, line-tracking scanner.
pub mod scanner;

// Re-exports for convenience
pub use engine::ScannerEngine;
pub use node::{CssNode, Stylesheet};
pub use scanner::Scanner;
