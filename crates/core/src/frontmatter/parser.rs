//! Frontmatter parsing from markdown documents.

use serde_yaml::Value;
use thiserror::Error;

use super::types::{Frontmatter, ParsedDocument, scalar_to_string};

/// Errors that can occur during frontmatter parsing.
#[derive(Debug, Error)]
pub enum FrontmatterParseError {
    #[error("invalid YAML frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("frontmatter must be a mapping, found {0}")]
    NotAMapping(&'static str),
}

/// Split a leading frontmatter block from the document body.
///
/// Frontmatter is the block between the first two lines consisting solely of
/// `---`, and the opening line must be the very first line of the document:
/// ```markdown
/// ---
/// key: value
/// ---
/// # Document content
/// ```
/// Returns `(yaml, body)`, or `None` when there is no complete block.
pub fn split(content: &str) -> Option<(&str, &str)> {
    let content = strip_bom(content);
    let mut lines = content.split_inclusive('\n');

    let first = lines.next()?;
    if !is_delimiter(first) {
        return None;
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if is_delimiter(line) {
            return Some((&content[yaml_start..offset], &content[offset + line.len()..]));
        }
        offset += line.len();
    }

    // No closing ---, treat as no frontmatter
    None
}

/// Parse frontmatter from markdown content.
///
/// Fails when the delimited block is not valid YAML or not a mapping.
pub fn parse(content: &str) -> Result<ParsedDocument, FrontmatterParseError> {
    let content = strip_bom(content);
    match split(content) {
        Some((yaml, body)) => Ok(ParsedDocument {
            frontmatter: Some(parse_yaml(yaml)?),
            body: body.to_string(),
        }),
        None => Ok(ParsedDocument { frontmatter: None, body: content.to_string() }),
    }
}

/// Parse frontmatter, treating a malformed block as empty.
///
/// The block is still removed from the body, so broken YAML never leaks into
/// the document text. Missing or malformed frontmatter is a data-quality
/// condition, so this never fails.
pub fn parse_lenient(content: &str) -> ParsedDocument {
    let content = strip_bom(content);
    match split(content) {
        Some((yaml, body)) => {
            let frontmatter = parse_yaml(yaml).unwrap_or_else(|e| {
                tracing::debug!("ignoring malformed frontmatter: {}", e);
                Frontmatter::default()
            });
            ParsedDocument { frontmatter: Some(frontmatter), body: body.to_string() }
        }
        None => ParsedDocument { frontmatter: None, body: content.to_string() },
    }
}

fn parse_yaml(yaml: &str) -> Result<Frontmatter, FrontmatterParseError> {
    let has_content = yaml.lines().map(str::trim).any(|l| !l.is_empty() && !l.starts_with('#'));
    if !has_content {
        return Ok(Frontmatter::default());
    }

    match serde_yaml::from_str::<Value>(yaml)? {
        Value::Null => Ok(Frontmatter::default()),
        Value::Mapping(map) => Ok(Frontmatter {
            fields: map
                .into_iter()
                .filter_map(|(k, v)| scalar_to_string(&k).map(|k| (k, v)))
                .collect(),
        }),
        Value::Sequence(_) => Err(FrontmatterParseError::NotAMapping("a sequence")),
        _ => Err(FrontmatterParseError::NotAMapping("a scalar")),
    }
}

fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == "---"
}
