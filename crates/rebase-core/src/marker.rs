//! Region marker grammar.
//!
//! Markers are recognized inside a single comment node's text:
//!
//! ```css
//! /* region cssRebase:images */
//! /* endregion cssRebase:images */
//! ```
//!
//! The start pattern is `^\s*region\s+<FORMAT>\s*(\S+)\s*$` and the end
//! pattern is `^\s*endregion\s+<FORMAT>\s*(\S+)\s*$`, where `<FORMAT>` is a
//! configurable literal token (the colon is part of the default token).
//! Matching is case-sensitive and anchored over the full comment body; a
//! comment that matches neither pattern is not a marker and is ignored.

use regex::Regex;

use crate::engine::CommentNode;

/// Default marker format token. The trailing colon is part of the token.
pub const DEFAULT_FORMAT: &str = "cssRebase:";

/// A recognized marker, carrying its comment's source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// A `region` directive opening a region at `line`.
    Start {
        /// The target path the region rebases URLs onto.
        path: String,
        /// 1-based source line of the marker comment.
        line: usize,
    },
    /// An `endregion` directive closing the innermost open region at `line`.
    End {
        /// The path named by the end marker. Pairing ignores it; the
        /// resolved region keeps its start marker's path.
        path: String,
        /// 1-based source line of the marker comment.
        line: usize,
    },
}

/// Compiled start and end marker patterns for one format token.
#[derive(Debug, Clone)]
pub struct MarkerGrammar {
    start: Regex,
    end: Regex,
}

impl MarkerGrammar {
    /// Compile the marker grammar for a format token.
    ///
    /// The token is inserted as a literal (regex metacharacters escaped), so
    /// a format like `rebase(v2):` cannot corrupt the pattern.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`regex::Error`] if the composed pattern fails
    /// to compile.
    pub fn new(format: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            start: Self::compile("region", format)?,
            end: Self::compile("endregion", format)?,
        })
    }

    fn compile(keyword: &str, format: &str) -> Result<Regex, regex::Error> {
        let token = regex::escape(format);
        Regex::new(&format!(r"^\s*{keyword}\s+{token}\s*(\S+)\s*$"))
    }

    /// Match one comment against the start pattern, then the end pattern.
    ///
    /// Returns `None` for comments that are not markers.
    #[must_use]
    pub fn parse(&self, comment: &CommentNode) -> Option<Marker> {
        if let Some(captures) = self.start.captures(&comment.text) {
            return Some(Marker::Start {
                path: captures[1].to_string(),
                line: comment.line,
            });
        }

        if let Some(captures) = self.end.captures(&comment.text) {
            return Some(Marker::End {
                path: captures[1].to_string(),
                line: comment.line,
            });
        }

        None
    }
}
