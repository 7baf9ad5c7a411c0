//! Byte ranges locating lines in the source document.

/// A byte range in the source text, `[start, end)`.
///
/// Produced by the [`Lexer`](crate::lexer::Lexer) for every line and reported
/// by the CLI's `lines` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Starting byte offset (inclusive).
    pub start: u32,
    /// Ending byte offset (exclusive).
    pub end: u32,
}

impl Span {
    /// Create a new span from byte offsets.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}
