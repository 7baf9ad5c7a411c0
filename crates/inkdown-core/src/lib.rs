//! # Inkdown Core
//!
//! A single-pass converter from a small Markdown dialect to HTML.
//!
//! The dialect has four constructs:
//!
//! - `#` headers, any number of `#` (`<h1>`, `<h2>`, ... with no upper bound)
//! - `*` unordered list items, consecutive items sharing one `<ul>`
//! - `__bold__` and `_italic_` spans inside list items and paragraphs
//! - every other line is a paragraph
//!
//! ## Quick Start
//!
//! ```rust
//! use inkdown_core::to_html;
//!
//! let html = to_html("# Groceries\n* __milk__\n* _eggs_");
//! assert_eq!(
//!     html,
//!     "<h1>Groceries</h1><ul><li><strong>milk</strong></li><li><em>eggs</em></li></ul>"
//! );
//! ```
//!
//! ## Stepping the state machine
//!
//! The block builder is exposed as a pure transition function so a single
//! line can be fed through it on its own:
//!
//! ```rust
//! use inkdown_core::{transition, ParserState};
//!
//! let (state, html) = transition(ParserState::default(), "* one");
//! assert_eq!(html, "<ul><li>one</li>");
//! assert!(state.in_list);
//! ```
//!
//! Conversion never fails and never escapes its input.

pub mod block;
pub mod converter;
pub mod inline;
pub mod lexer;
pub mod span;

pub use block::{classify, LineKind};
pub use converter::{convert_lines, to_html, transition, ParserState};
pub use inline::format_inline;
