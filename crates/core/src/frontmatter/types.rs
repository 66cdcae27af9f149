//! Frontmatter types and data structures.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::HashMap;

/// Represents parsed YAML frontmatter from a markdown document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Fields as key-value pairs.
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

/// Result of splitting frontmatter from markdown.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// Parsed frontmatter (if a delimited block was present).
    pub frontmatter: Option<Frontmatter>,
    /// The markdown body (everything after frontmatter).
    pub body: String,
}

impl Frontmatter {
    /// Returns true when no fields were parsed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get a field rendered as a trimmed, non-empty string.
    ///
    /// Strings, numbers and booleans are accepted; sequences and mappings are not.
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.fields
            .get(key)
            .and_then(scalar_to_string)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Get a field as a list of strings.
    ///
    /// Accepts a YAML sequence of scalars, a single scalar, or a comma-separated
    /// string. Entries are trimmed, empty entries and repeats are dropped, and
    /// source order is kept.
    pub fn get_list(&self, key: &str) -> Vec<String> {
        let raw: Vec<String> = match self.fields.get(key) {
            Some(Value::Sequence(items)) => items.iter().filter_map(scalar_to_string).collect(),
            Some(Value::String(s)) => s.split(',').map(str::to_string).collect(),
            Some(other) => scalar_to_string(other).into_iter().collect(),
            None => Vec::new(),
        };

        let mut out: Vec<String> = Vec::with_capacity(raw.len());
        for item in raw {
            let item = item.trim();
            if !item.is_empty() && !out.iter().any(|existing| existing == item) {
                out.push(item.to_string());
            }
        }
        out
    }

    /// Convert all fields to a JSON object.
    ///
    /// Values that have no JSON representation are skipped.
    pub fn to_json(&self) -> serde_json::Map<String, serde_json::Value> {
        self.fields
            .iter()
            .filter_map(|(k, v)| serde_json::to_value(v).ok().map(|v| (k.clone(), v)))
            .collect()
    }
}

pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        _ => None,
    }
}
