//! The engine wiring onto `rebase-core`'s capability trait.

use rebase_core::{CommentNode, CssEngine, ParseError, UrlRef};

use crate::node::{CssNode, Stylesheet};
use crate::scanner::Scanner;

/// The default [`CssEngine`]: scanner-backed parse, traverse, and print.
///
/// Stateless; one instance can serve any number of documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScannerEngine;

impl CssEngine for ScannerEngine {
    type Tree = Stylesheet;

    fn parse(&self, css: &str) -> Result<Stylesheet, ParseError> {
        Scanner::new(css).run()
    }

    fn comments(&self, tree: &Stylesheet) -> Vec<CommentNode> {
        tree.nodes
            .iter()
            .filter_map(|node| match node {
                CssNode::Comment { text, line } => Some(CommentNode {
                    text: text.clone(),
                    line: *line,
                }),
                CssNode::Raw(_) | CssNode::Url { .. } => None,
            })
            .collect()
    }

    fn rewrite_urls<F>(&self, tree: &mut Stylesheet, mut rewrite: F)
    where
        F: FnMut(&UrlRef<'_>) -> Option<String>,
    {
        for node in &mut tree.nodes {
            if let CssNode::Url { content, line, .. } = node {
                let replacement = rewrite(&UrlRef {
                    content: content.as_str(),
                    line: *line,
                });
                if let Some(text) = replacement {
                    *content = text;
                }
            }
        }
    }

    fn serialize(&self, tree: &Stylesheet) -> String {
        tree.to_css()
    }
}
