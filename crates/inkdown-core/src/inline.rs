//! Inline formatter: delimiter spans to `<strong>` / `<em>` tags.
//!
//! Each rule is a global, left-to-right, non-overlapping substitution of
//! `{delim}content{delim}` with the shortest possible non-empty `content`.
//! Rules run in order over the output of the previous rule, so the bold pass
//! consumes `__` pairs before the italic pass can see their underscores.
//!
//! An opening delimiter with no closer later in the line is left as literal
//! text. Nothing is escaped.

use std::borrow::Cow;

use memchr::memmem;

/// One delimiter-to-tag substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineRule {
    pub delimiter: &'static str,
    pub tag: &'static str,
}

/// Substitutions in application order. Bold must precede italic.
pub const INLINE_RULES: [InlineRule; 2] = [
    InlineRule {
        delimiter: "__",
        tag: "strong",
    },
    InlineRule {
        delimiter: "_",
        tag: "em",
    },
];

/// Apply every [`INLINE_RULES`] substitution to a single line.
///
/// Borrows the input when no span matched.
///
/// ```rust
/// use inkdown_core::inline::format_inline;
///
/// assert_eq!(
///     format_inline("This will _be_ __mixed__"),
///     "This will <em>be</em> <strong>mixed</strong>"
/// );
/// assert_eq!(format_inline("a stray _ stays"), "a stray _ stays");
/// ```
pub fn format_inline(line: &str) -> Cow<'_, str> {
    let mut text = Cow::Borrowed(line);
    for rule in &INLINE_RULES {
        let replaced = match apply_rule(&text, rule) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        if let Some(s) = replaced {
            text = Cow::Owned(s);
        }
    }
    text
}

/// Run one rule over `text`, returning `Cow::Borrowed` if nothing matched.
pub fn apply_rule<'t>(text: &'t str, rule: &InlineRule) -> Cow<'t, str> {
    let bytes = text.as_bytes();
    let delim = rule.delimiter.as_bytes();
    let finder = memmem::Finder::new(delim);

    let mut out: Option<String> = None;
    let mut flushed = 0;
    let mut search = 0;

    while let Some(rel) = finder.find(&bytes[search..]) {
        let open = search + rel;
        let content_start = open + delim.len();

        // Content must hold at least one character.
        let Some(first) = text[content_start..].chars().next() else {
            break;
        };
        let close_search = content_start + first.len_utf8();

        // No closer after this opener means none after any later opener either.
        let Some(close_rel) = finder.find(&bytes[close_search..]) else {
            break;
        };
        let close = close_search + close_rel;

        let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 16));
        buf.push_str(&text[flushed..open]);
        wrap_with_tag(buf, &text[content_start..close], rule.tag);

        search = close + delim.len();
        flushed = search;
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&text[flushed..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(text),
    }
}

/// Append `<tag>content</tag>` to `out`.
#[inline]
pub fn wrap_with_tag(out: &mut String, content: &str, tag: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(content);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
