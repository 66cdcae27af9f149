use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use serde::Deserialize;

use crate::indexer::IndexConfig;
use crate::store::SearchConfig;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub search: SearchSettings,
    /// Abbreviation to expansions used for query expansion.
    #[serde(default)]
    pub glossary: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Profile {
    pub docs_root: String,
    #[serde(default = "default_glob")]
    pub glob: String,
    #[serde(default = "default_max_depth")]
    pub max_depth: u8,
    #[serde(default = "default_summary_length")]
    pub summary_length: usize,
    /// Folders to skip while indexing (relative to docs_root).
    #[serde(default)]
    pub excluded_folders: Vec<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            docs_root: "./docs".to_string(),
            glob: default_glob(),
            max_depth: default_max_depth(),
            summary_length: default_summary_length(),
            excluded_folders: Vec::new(),
        }
    }
}

fn default_glob() -> String {
    "**/*.md".to_string()
}

fn default_max_depth() -> u8 {
    6
}

fn default_summary_length() -> usize {
    200
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchSettings {
    #[serde(default = "default_title_boost")]
    pub title_boost: f64,
    #[serde(default = "default_snippet_length")]
    pub snippet_length: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { title_boost: default_title_boost(), snippet_length: default_snippet_length() }
    }
}

fn default_title_boost() -> f64 {
    3.0
}

fn default_snippet_length() -> usize {
    200
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    /// The file this was loaded from; `None` when built-in defaults were used.
    pub config_path: Option<PathBuf>,
    pub docs_root: PathBuf,
    pub glob: String,
    pub max_depth: u8,
    pub summary_length: usize,
    pub excluded_folders: Vec<PathBuf>,
    pub search: SearchSettings,
    pub glossary: BTreeMap<String, Vec<String>>,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    /// Indexer inputs for the active profile.
    pub fn index_config(&self) -> IndexConfig {
        IndexConfig {
            root: self.docs_root.clone(),
            glob: self.glob.clone(),
            max_depth: self.max_depth,
            summary_length: self.summary_length,
            excluded_folders: self.excluded_folders.clone(),
        }
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            title_boost: self.search.title_boost,
            snippet_length: self.search.snippet_length,
            glossary: self.glossary.clone(),
        }
    }
}
