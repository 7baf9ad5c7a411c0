//! Line splitter feeding the block builder.
//!
//! Lines are separated by `\n` only. A `\r` right before the newline is
//! dropped so CRLF input behaves like LF input. Splitting follows plain
//! `split('\n')` semantics with one exception: an empty document has no
//! lines at all. In particular a trailing newline produces a final empty
//! line.
//!
//! Newline scanning uses `memchr`, and every [`Line`] borrows from the input.

use crate::span::Span;
use memchr::memchr;

/// A single line from the input with its source span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line text, without the newline (or CRLF) terminator.
    pub text: &'a str,
    /// Byte span of `text` in the original input.
    pub span: Span,
}

/// Iterator over the lines of a document.
pub struct Lexer<'a> {
    input: &'a str,
    offset: usize,
    /// Set once the final (unterminated) line has been produced.
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            done: input.is_empty(),
        }
    }

    /// Read the next line, or `None` once the input is exhausted.
    #[inline(always)]
    fn read_line(&mut self) -> Option<Line<'a>> {
        if self.done {
            return None;
        }

        let bytes = self.input.as_bytes();
        let start = self.offset;

        let end = match memchr(b'\n', &bytes[start..]) {
            Some(pos) => start + pos,
            None => {
                self.done = true;
                bytes.len()
            }
        };

        let text_end = if end > start && bytes[end - 1] == b'\r' {
            end - 1
        } else {
            end
        };

        self.offset = end + 1;

        // `start`, `end` and `text_end` all sit on ASCII bytes or the input
        // end, so the slice is on char boundaries.
        Some(Line {
            text: &self.input[start..text_end],
            span: Span::new(start as u32, text_end as u32),
        })
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Line<'a>;

    #[inline]
    fn next(&mut self) -> Option<Line<'a>> {
        self.read_line()
    }
}
