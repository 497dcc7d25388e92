//! Document representation and serialization.
//!
//! The scanner keeps everything it does not care about as verbatim text, so
//! serialization is a straight concatenation and an untouched document round
//! trips byte-identically.

use core::fmt;

/// One node of a scanned stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssNode {
    /// A verbatim span of CSS text.
    Raw(String),

    /// A `/* ... */` comment. `text` excludes the delimiters.
    Comment {
        /// The comment body.
        text: String,
        /// 1-based line of the opening `/*`.
        line: usize,
    },

    /// A `url(...)` token.
    Url {
        /// The function ident as authored (`url`, `URL`, ...).
        name: String,
        /// The raw text between the parentheses, quotes and spacing
        /// included. Rewrites replace this wholesale with an unquoted path.
        content: String,
        /// 1-based line of the function ident.
        line: usize,
    },
}

/// A scanned stylesheet: the ordered node list of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    /// The document's nodes in source order.
    pub nodes: Vec<CssNode>,
}

impl Stylesheet {
    /// Serialize the document back to CSS text.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                CssNode::Raw(text) => out.push_str(text),
                CssNode::Comment { text, .. } => {
                    out.push_str("/*");
                    out.push_str(text);
                    out.push_str("*/");
                }
                CssNode::Url { name, content, .. } => {
                    out.push_str(name);
                    out.push('(');
                    out.push_str(content);
                    out.push(')');
                }
            }
        }
        out
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
