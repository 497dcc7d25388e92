//! The CSS engine capability consumed by the transform.
//!
//! The core never parses CSS itself. A [`CssEngine`] turns text into an
//! opaque document tree, exposes the two node views the algorithm needs
//! (comments and URL references, both with 1-based source lines), and prints
//! the tree back to text. Keeping this boundary abstract lets the region and
//! rebase logic run against an in-memory fixture in tests.

use crate::error::ParseError;

/// A comment node yielded by the engine, in document order.
///
/// `text` is the comment body without the `/*` and `*/` delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentNode {
    /// The comment body.
    pub text: String,
    /// 1-based source line of the comment's opening delimiter.
    pub line: usize,
}

/// A URL reference inside a declaration value, as authored.
///
/// `content` is the raw text between the parentheses of `url(...)`,
/// including any quoting; the rebaser strips one layer of quotes itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlRef<'a> {
    /// The raw reference text, quotes included.
    pub content: &'a str,
    /// 1-based source line of the enclosing `url(...)` token.
    pub line: usize,
}

/// Parse, traverse, and print capability for CSS documents.
///
/// Implementations must fail [`CssEngine::parse`] on malformed CSS; every
/// other operation is infallible. A tree handed back by `parse` is only ever
/// used with the engine that produced it.
pub trait CssEngine {
    /// The parsed document representation.
    type Tree;

    /// Parse one complete CSS document.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the text is not syntactically valid CSS.
    fn parse(&self, css: &str) -> Result<Self::Tree, ParseError>;

    /// The document's comment nodes, in source order.
    fn comments(&self, tree: &Self::Tree) -> Vec<CommentNode>;

    /// Visit every URL reference in source order.
    ///
    /// Returning `Some(text)` from the callback replaces the reference's
    /// content with `text` (unquoted); `None` leaves it untouched.
    fn rewrite_urls<F>(&self, tree: &mut Self::Tree, rewrite: F)
    where
        F: FnMut(&UrlRef<'_>) -> Option<String>;

    /// Serialize the document back to CSS text.
    fn serialize(&self, tree: &Self::Tree) -> String;
}
