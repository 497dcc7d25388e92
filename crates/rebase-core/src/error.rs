//! Error taxonomy for a transform invocation.
//!
//! A single invocation raises at most one error, at the parse boundary.
//! Unmatched markers, URLs outside any region, and already-remote or
//! already-absolute URLs are silent-skip conditions, not errors.

use thiserror::Error;

/// Malformed CSS rejected by the engine.
///
/// When this is raised, no output is produced for the offending document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("CSS parse error at line {line}: {message}")]
pub struct ParseError {
    /// Human-readable description of what the engine could not parse.
    pub message: String,
    /// 1-based source line where parsing failed.
    pub line: usize,
}

impl ParseError {
    /// Create a parse error at the given line.
    pub fn new(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}

/// Errors produced by a single [`Rebaser`](crate::Rebaser) invocation.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The input is not valid CSS; no output was produced for it.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The marker format token produced an uncompilable pattern.
    #[error("invalid marker format: {0}")]
    Pattern(#[from] regex::Error),
}
