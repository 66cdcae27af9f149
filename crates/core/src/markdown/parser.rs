//! Line-oriented structural parser.

use std::sync::LazyLock;

use regex::Regex;

use super::comrak::heading_text;
use super::types::{HeadingSpan, ParsedMarkdown};
use crate::frontmatter;

// 1-6 `#` at the start of the line, then whitespace. `#######` and `#tag` are text.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})[ \t]+").unwrap());

/// An open fenced code block.
#[derive(Debug, Clone, Copy)]
struct Fence {
    marker: char,
    len: usize,
}

impl Fence {
    /// Recognise an opening fence: up to three spaces, then at least three
    /// backticks or tildes. Backtick fences may not carry backticks in their
    /// info string.
    fn open(line: &str) -> Option<Self> {
        let (marker, len, rest) = fence_run(line)?;
        if marker == '`' && rest.contains('`') {
            return None;
        }
        Some(Self { marker, len })
    }

    /// A closing fence uses the same marker, is at least as long as the
    /// opening one, and carries nothing else.
    fn closes(&self, line: &str) -> bool {
        fence_run(line).is_some_and(|(marker, len, rest)| {
            marker == self.marker && len >= self.len && rest.trim().is_empty()
        })
    }
}

fn fence_run(line: &str) -> Option<(char, usize, &str)> {
    let trimmed = line.trim_start_matches(' ');
    if line.len() - trimmed.len() > 3 {
        return None;
    }

    let marker = trimmed.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = trimmed.chars().take_while(|c| *c == marker).count();
    if len < 3 {
        return None;
    }
    Some((marker, len, &trimmed[len..]))
}

/// Parse raw file text into frontmatter, preamble and heading spans.
///
/// Never fails: missing or malformed frontmatter yields an empty mapping, and
/// an unterminated code fence extends to the end of the document.
pub fn parse(text: &str) -> ParsedMarkdown {
    let parsed = frontmatter::parse_lenient(text);

    let mut preamble: Vec<&str> = Vec::new();
    let mut headings: Vec<HeadingSpan> = Vec::new();
    let mut current: Option<(u8, String, Vec<&str>)> = None;
    let mut fence: Option<Fence> = None;

    for line in parsed.body.lines() {
        let is_heading = if let Some(open) = fence {
            if open.closes(line) {
                fence = None;
            }
            false
        } else if let Some(opened) = Fence::open(line) {
            fence = Some(opened);
            false
        } else {
            HEADING_RE.is_match(line)
        };

        if is_heading {
            if let Some((level, title, lines)) = current.take() {
                headings.push(HeadingSpan { level, title, content: trim_block(&lines) });
            }
            let level = line.chars().take_while(|c| *c == '#').count() as u8;
            current = Some((level, heading_text(line), Vec::new()));
            continue;
        }

        match current {
            Some((_, _, ref mut lines)) => lines.push(line),
            None => preamble.push(line),
        }
    }

    if let Some((level, title, lines)) = current {
        headings.push(HeadingSpan { level, title, content: trim_block(&lines) });
    }

    ParsedMarkdown {
        frontmatter: parsed.frontmatter.unwrap_or_default(),
        preamble: trim_block(&preamble),
        headings,
    }
}

/// Join lines, dropping leading blank lines and trailing whitespace.
fn trim_block(lines: &[&str]) -> String {
    let start = lines.iter().position(|l| !l.trim().is_empty()).unwrap_or(lines.len());
    lines[start..].join("\n").trim_end().to_string()
}
