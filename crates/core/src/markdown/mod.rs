//! Markdown structural parsing.
//!
//! Splits raw markdown into frontmatter, a preamble, and one
//! [`HeadingSpan`] per ATX heading line. Fenced code blocks are opaque, so
//! heading-like lines inside them stay part of the surrounding content.

pub mod comrak;
pub mod parser;
pub mod types;

pub use parser::parse;
pub use types::{HeadingSpan, ParsedMarkdown};
