//! The lossless, line-tracking scanner.
//!
//! A reduced CSS tokenizer per
//! [§ 4.3 Tokenizer Algorithms](https://www.w3.org/TR/css-syntax-3/#tokenizer-algorithms):
//! only comments and `url(...)` tokens are lifted out as nodes, everything
//! else is preserved verbatim. Strings are skipped as opaque spans so that
//! braces, comment openers, and `url(` inside them are never misread.

use rebase_core::ParseError;

use crate::node::{CssNode, Stylesheet};

/// Scans one CSS document into a [`Stylesheet`].
pub struct Scanner {
    /// The input string being scanned.
    input: Vec<char>,
    /// Current position in the input.
    position: usize,
    /// Current 1-based source line.
    line: usize,
    /// Pending verbatim text not yet flushed into a [`CssNode::Raw`].
    raw: String,
    /// Collected nodes.
    nodes: Vec<CssNode>,
    /// Current `{` nesting depth.
    depth: usize,
}

impl Scanner {
    /// Create a scanner over the given input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into().chars().collect(),
            position: 0,
            line: 1,
            raw: String::new(),
            nodes: Vec::new(),
            depth: 0,
        }
    }

    /// Scan the whole document.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for unterminated comments, strings, or
    /// `url(` tokens, and for unbalanced curly braces.
    pub fn run(mut self) -> Result<Stylesheet, ParseError> {
        loop {
            if self.peek() == Some('/') && self.peek_at(1) == Some('*') {
                self.consume_comment()?;
                continue;
            }

            let Some(c) = self.peek() else { break };

            match c {
                '"' | '\'' => {
                    let mut span = String::new();
                    self.consume_string(&mut span)?;
                    self.raw.push_str(&span);
                }
                '{' => {
                    self.depth += 1;
                    self.consume_into_raw();
                }
                '}' => {
                    if self.depth == 0 {
                        return Err(ParseError::new("unmatched '}'", self.line));
                    }
                    self.depth -= 1;
                    self.consume_into_raw();
                }
                c if is_ident_start_code_point(c) || self.starts_dashed_ident() => {
                    self.consume_ident_like()?;
                }
                _ => self.consume_into_raw(),
            }
        }

        if self.depth > 0 {
            return Err(ParseError::new("unclosed block at end of input", self.line));
        }

        self.flush_raw();
        Ok(Stylesheet { nodes: self.nodes })
    }

    /// Consume a `/* ... */` comment into a [`CssNode::Comment`].
    fn consume_comment(&mut self) -> Result<(), ParseError> {
        let start_line = self.line;
        let _ = self.consume(); // /
        let _ = self.consume(); // *

        let mut text = String::new();
        loop {
            match self.consume() {
                Some('*') if self.peek() == Some('/') => {
                    let _ = self.consume(); // /
                    break;
                }
                Some(c) => text.push(c),
                None => return Err(ParseError::new("unterminated comment", start_line)),
            }
        }

        self.flush_raw();
        self.nodes.push(CssNode::Comment {
            text,
            line: start_line,
        });
        Ok(())
    }

    /// Consume a quoted string verbatim into `span`, quotes included.
    ///
    /// A raw newline inside a string is a `<bad-string-token>` per
    /// [§ 4.3.4](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    /// and is rejected here, as is EOF before the closing quote.
    fn consume_string(&mut self, span: &mut String) -> Result<(), ParseError> {
        let start_line = self.line;
        let quote = self.consume().unwrap_or_default();
        span.push(quote);

        loop {
            match self.consume() {
                Some(c) if c == quote => {
                    span.push(c);
                    return Ok(());
                }
                Some('\n') => {
                    return Err(ParseError::new("unterminated string", start_line));
                }
                Some('\\') => {
                    span.push('\\');
                    if let Some(escaped) = self.consume() {
                        span.push(escaped);
                    }
                }
                Some(c) => span.push(c),
                None => return Err(ParseError::new("unterminated string", start_line)),
            }
        }
    }

    /// Consume an ident sequence; a `url(`-shaped one becomes a
    /// [`CssNode::Url`], anything else stays raw.
    fn consume_ident_like(&mut self) -> Result<(), ParseError> {
        let start_line = self.line;

        let mut ident = String::new();
        while let Some(c) = self.peek() {
            if is_ident_code_point(c) {
                ident.push(c);
                let _ = self.consume();
            } else {
                break;
            }
        }

        if ident.eq_ignore_ascii_case("url") && self.peek() == Some('(') {
            let _ = self.consume(); // (
            let content = self.consume_url_content(start_line)?;
            self.flush_raw();
            self.nodes.push(CssNode::Url {
                name: ident,
                content,
                line: start_line,
            });
        } else {
            self.raw.push_str(&ident);
        }

        Ok(())
    }

    /// Consume the raw content of a `url(...)` token up to its closing
    /// paren. Quoted content is skipped as a string so a `)` inside quotes
    /// does not terminate the token.
    fn consume_url_content(&mut self, start_line: usize) -> Result<String, ParseError> {
        let mut content = String::new();

        loop {
            match self.peek() {
                Some(')') => {
                    let _ = self.consume();
                    return Ok(content);
                }
                Some('"' | '\'') => self.consume_string(&mut content)?,
                Some('\\') => {
                    let _ = self.consume();
                    content.push('\\');
                    if let Some(escaped) = self.consume() {
                        content.push(escaped);
                    }
                }
                Some(_) => self.consume_into(&mut content),
                None => return Err(ParseError::new("unterminated url(", start_line)),
            }
        }
    }

    /// Whether the input starts a `-`-prefixed ident sequence.
    fn starts_dashed_ident(&self) -> bool {
        self.peek() == Some('-')
            && self
                .peek_at(1)
                .is_some_and(|c| is_ident_start_code_point(c) || c == '-')
    }

    /// Flush pending verbatim text into a [`CssNode::Raw`].
    fn flush_raw(&mut self) {
        if !self.raw.is_empty() {
            let text = core::mem::take(&mut self.raw);
            self.nodes.push(CssNode::Raw(text));
        }
    }

    /// Consume one character into the pending raw buffer.
    fn consume_into_raw(&mut self) {
        if let Some(c) = self.consume() {
            self.raw.push(c);
        }
    }

    /// Consume one character into an arbitrary buffer.
    fn consume_into(&mut self, buffer: &mut String) {
        if let Some(c) = self.consume() {
            buffer.push(c);
        }
    }

    /// Consume and return the next character, tracking line numbers.
    fn consume(&mut self) -> Option<char> {
        let c = self.input.get(self.position).copied();
        if let Some(c) = c {
            self.position += 1;
            if c == '\n' {
                self.line += 1;
            }
        }
        c
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    /// Peek at a character at an offset from the current position.
    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }
}

/// [§ 4.2 Definitions - ident-start code point](https://www.w3.org/TR/css-syntax-3/#ident-start-code-point)
fn is_ident_start_code_point(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// [§ 4.2 Definitions - ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
fn is_ident_code_point(c: char) -> bool {
    is_ident_start_code_point(c) || c.is_ascii_digit() || c == '-'
}
