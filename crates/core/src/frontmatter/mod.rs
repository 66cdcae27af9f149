//! Frontmatter splitting and parsing.
//!
//! This module provides functionality to:
//! - Split a leading `---` YAML block from a markdown document
//! - Parse it strictly ([`parse`]) or leniently ([`parse_lenient`])
//! - Read scalar, list and JSON views of the parsed fields

pub mod parser;
pub mod types;

pub use parser::{FrontmatterParseError, parse, parse_lenient, split};
pub use types::{Frontmatter, ParsedDocument};
