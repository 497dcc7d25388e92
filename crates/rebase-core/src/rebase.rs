//! The transform front door: region extraction plus URL rewriting.
//!
//! One [`Rebaser::transform`] call handles one complete CSS document:
//! parse, extract regions, rewrite URLs, serialize. URLs that are already
//! remote (`scheme://host/...`) or absolute (`/...`) are never touched, and
//! a URL with no enclosing region passes through unchanged.

use crate::engine::CssEngine;
use crate::error::TransformError;
use crate::marker::{DEFAULT_FORMAT, MarkerGrammar};
use crate::region::{enclosing_region, extract_regions};

/// Rewrites region-scoped relative URLs in CSS documents.
///
/// The rebaser owns an injected [`CssEngine`] and the compiled marker
/// grammar; it carries no per-document state, so one instance can transform
/// any number of documents.
#[derive(Debug, Clone)]
pub struct Rebaser<E> {
    engine: E,
    grammar: MarkerGrammar,
}

impl<E: CssEngine> Rebaser<E> {
    /// Create a rebaser using the default `cssRebase:` marker format.
    ///
    /// # Panics
    ///
    /// Panics if the built-in default grammar fails to compile, which would
    /// indicate a broken build rather than bad input.
    #[must_use]
    pub fn new(engine: E) -> Self {
        let grammar = MarkerGrammar::new(DEFAULT_FORMAT).expect("default marker grammar");
        Self { engine, grammar }
    }

    /// Create a rebaser with a custom marker format token.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Pattern`] if the marker pattern cannot be
    /// compiled from the token.
    pub fn with_format(engine: E, format: &str) -> Result<Self, TransformError> {
        Ok(Self {
            engine,
            grammar: MarkerGrammar::new(format)?,
        })
    }

    /// Transform one complete CSS document.
    ///
    /// The input must be a whole document; the transform does not support
    /// fragments split mid-rule. Callers feeding a streaming source must
    /// buffer to document boundaries first.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Parse`] when the engine rejects the input;
    /// no output is produced in that case.
    pub fn transform(&self, css: &str) -> Result<String, TransformError> {
        self.transform_with_observer(css, |_| {})
    }

    /// Transform one document, notifying `observer` once per rewritten URL
    /// with the final joined path.
    ///
    /// The observer is a side channel for host logging; it does not affect
    /// the output.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Parse`] when the engine rejects the input.
    pub fn transform_with_observer<F>(
        &self,
        css: &str,
        mut observer: F,
    ) -> Result<String, TransformError>
    where
        F: FnMut(&str),
    {
        let mut tree = self.engine.parse(css)?;

        let comments = self.engine.comments(&tree);
        let regions = extract_regions(&self.grammar, &comments);

        self.engine.rewrite_urls(&mut tree, |url| {
            let region = enclosing_region(&regions, url.line)?;
            let target = unquote(url.content.trim());

            if has_network_host(target) || target.starts_with('/') {
                return None;
            }

            let joined = join_paths(&region.path, target);
            tracing::debug!(line = url.line, path = %joined, "rebase");
            observer(&joined);
            Some(joined)
        });

        Ok(self.engine.serialize(&tree))
    }
}

/// Strip one layer of matched single or double quotes.
fn unquote(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &text[1..text.len() - 1];
        }
    }
    text
}

/// Whether the target names a network host (`scheme://authority/...`).
///
/// A scheme with an empty authority (`http:///x`) does not count, matching
/// the looseness of legacy URL parsers. Schemes without `//` (`data:`,
/// `mailto:`) never have a host.
fn has_network_host(target: &str) -> bool {
    let Some((scheme, rest)) = target.split_once("://") else {
        return false;
    };

    if scheme.is_empty()
        || !scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return false;
    }

    !matches!(rest.chars().next(), None | Some('/'))
}

/// Join a region path with a relative target, collapsing `.` and `..`.
///
/// Leading `..` segments survive for relative bases; an absolute base keeps
/// its leading slash and clamps `..` at the root, matching POSIX join
/// semantics. An empty result becomes `.`.
fn join_paths(base: &str, relative: &str) -> String {
    let absolute = base.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in base.split('/').chain(relative.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.is_empty() {
                    if !absolute {
                        segments.push("..");
                    }
                } else if segments.last() == Some(&"..") {
                    segments.push("..");
                } else {
                    let _ = segments.pop();
                }
            }
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if absolute {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}
