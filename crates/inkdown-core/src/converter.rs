//! Block builder: the line-by-line state machine producing HTML.
//!
//! The only state carried from one line to the next is [`ParserState`], which
//! records whether a `<ul>` is currently open. It is passed into and returned
//! from [`transition`] rather than mutated in place, so a single step can be
//! exercised on its own.
//!
//! Output is emitted directly per line; no tree is built.

use log::{debug, trace};

use crate::block::{classify, LineKind};
use crate::inline::{format_inline, wrap_with_tag};
use crate::lexer::Lexer;

const LIST_OPEN: &str = "<ul>";
const LIST_CLOSE: &str = "</ul>";

/// State threaded between lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserState {
    /// A `<ul>` has been emitted and not yet closed.
    pub in_list: bool,
}

impl ParserState {
    pub const INITIAL: ParserState = ParserState { in_list: false };
}

/// Process one line: return the next state and the HTML the line emits.
///
/// ```rust
/// use inkdown_core::converter::{transition, ParserState};
///
/// let (state, html) = transition(ParserState::INITIAL, "* first");
/// assert!(state.in_list);
/// assert_eq!(html, "<ul><li>first</li>");
///
/// let (state, html) = transition(state, "done");
/// assert!(!state.in_list);
/// assert_eq!(html, "</ul><p>done</p>");
/// ```
pub fn transition(state: ParserState, line: &str) -> (ParserState, String) {
    let mut out = String::with_capacity(line.len() + 16);
    let next = emit_line(state, classify(line), &mut out);
    (next, out)
}

/// Append the emission for an already classified line to `out`.
pub fn emit_line(state: ParserState, kind: LineKind<'_>, out: &mut String) -> ParserState {
    match kind {
        LineKind::Header { level, content } => {
            close_list(state, out);
            // Header text is emitted verbatim, without inline formatting.
            let tag = format!("h{level}");
            wrap_with_tag(out, content, &tag);
            ParserState { in_list: false }
        }
        LineKind::ListItem { content } => {
            if !state.in_list {
                trace!("opening list");
                out.push_str(LIST_OPEN);
            }
            wrap_with_tag(out, &format_inline(content), "li");
            ParserState { in_list: true }
        }
        LineKind::Paragraph { content } => {
            close_list(state, out);
            wrap_with_tag(out, &format_inline(content), "p");
            ParserState { in_list: false }
        }
    }
}

/// Close a list left open at the end of the document.
#[inline]
pub fn finish(state: ParserState, out: &mut String) {
    close_list(state, out);
}

#[inline]
fn close_list(state: ParserState, out: &mut String) {
    if state.in_list {
        trace!("closing list");
        out.push_str(LIST_CLOSE);
    }
}

/// Convert a sequence of lines to HTML.
///
/// Lines are classified exactly as [`to_html`] would classify the lines of a
/// document; use this when the input is already split.
pub fn convert_lines<'a, I>(lines: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    let mut state = ParserState::INITIAL;
    let mut count = 0usize;

    for line in lines {
        state = emit_line(state, classify(line), &mut out);
        count += 1;
    }
    finish(state, &mut out);

    debug!("converted {} lines into {} bytes of html", count, out.len());
    out
}

/// Convert a whole document to HTML.
///
/// Total over all inputs: any string produces some HTML, and the empty string
/// produces the empty string.
///
/// ```rust
/// use inkdown_core::to_html;
///
/// assert_eq!(
///     to_html("# Start a list\n* Item 1\n* Item 2\nEnd a list"),
///     "<h1>Start a list</h1><ul><li>Item 1</li><li>Item 2</li></ul><p>End a list</p>"
/// );
/// ```
pub fn to_html(input: &str) -> String {
    convert_lines(Lexer::new(input).map(|line| line.text))
}
