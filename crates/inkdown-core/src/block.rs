//! Line classification.
//!
//! Every line is one of three block kinds, decided by the first character of
//! the trimmed line alone:
//!
//! - `#` starts a [`LineKind::Header`]; the level is the number of leading `#`
//!   and is never clamped, so `#######` yields level 7.
//! - `*` starts a [`LineKind::ListItem`].
//! - anything else, including an empty line, is a [`LineKind::Paragraph`].

/// The block kind of one line, borrowing its content from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `#`-prefixed line. Content has the markers and surrounding whitespace stripped.
    Header { level: usize, content: &'a str },
    /// `*`-prefixed line. Content is everything after the marker, trimmed.
    ListItem { content: &'a str },
    /// Any other line, trimmed.
    Paragraph { content: &'a str },
}

impl<'a> LineKind<'a> {
    /// The raw (not yet inline-formatted) content of the line.
    #[inline]
    pub fn content(&self) -> &'a str {
        match *self {
            LineKind::Header { content, .. }
            | LineKind::ListItem { content }
            | LineKind::Paragraph { content } => content,
        }
    }

    #[inline]
    pub fn is_list_item(&self) -> bool {
        matches!(self, LineKind::ListItem { .. })
    }

    /// Short lowercase name, used by the CLI and the Python bindings.
    pub fn name(&self) -> &'static str {
        match self {
            LineKind::Header { .. } => "header",
            LineKind::ListItem { .. } => "list_item",
            LineKind::Paragraph { .. } => "paragraph",
        }
    }
}

/// Classify a single line. The line is trimmed first.
///
/// ```rust
/// use inkdown_core::block::{classify, LineKind};
///
/// assert_eq!(
///     classify("  ## Title  "),
///     LineKind::Header { level: 2, content: "Title" }
/// );
/// assert_eq!(classify("* milk"), LineKind::ListItem { content: "milk" });
/// assert_eq!(classify("   "), LineKind::Paragraph { content: "" });
/// ```
#[inline]
pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    match trimmed.as_bytes().first() {
        Some(b'#') => {
            let level = trimmed.bytes().take_while(|&b| b == b'#').count();
            LineKind::Header {
                level,
                content: trimmed[level..].trim(),
            }
        }
        Some(b'*') => LineKind::ListItem {
            content: trimmed[1..].trim(),
        },
        _ => LineKind::Paragraph { content: trimmed },
    }
}
