use crate::config::types::{ConfigFile, LoggingConfig, Profile, ResolvedConfig};
use shellexpand::full;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("no profiles defined in config")]
    NoProfiles,

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,

    #[error("environment variable {var} has invalid value '{value}'")]
    InvalidEnv { var: String, value: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration, applying overrides from the process environment.
    ///
    /// With no explicit path, a missing default config file is not an error:
    /// built-in defaults are used.
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        Self::load_with_env(config_path, profile_override, |key| env::var(key).ok())
    }

    /// Like [`ConfigLoader::load`], reading overrides through `env`.
    pub fn load_with_env(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let (path, cf) = match config_path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.display().to_string()));
                }
                (Some(p.to_path_buf()), read_config(p)?)
            }
            None => {
                let p = default_config_path();
                if p.exists() {
                    let cf = read_config(&p)?;
                    (Some(p), cf)
                } else {
                    tracing::debug!("no config at {}, using defaults", p.display());
                    (None, builtin_config())
                }
            }
        };

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }
        if cf.profiles.is_empty() {
            return Err(ConfigError::NoProfiles);
        }

        let active = profile_override
            .map(ToOwned::to_owned)
            .or(cf.profile.clone())
            .unwrap_or_else(|| "default".to_string());

        let mut prof = cf
            .profiles
            .get(&active)
            .cloned()
            .ok_or_else(|| ConfigError::ProfileNotFound(active.clone()))?;

        apply_env_overrides(&mut prof, &env)?;

        let resolved = Self::resolve_profile(&active, &prof, &cf)?;
        let resolved = ResolvedConfig { config_path: path, ..resolved };
        validate(&resolved)?;
        Ok(resolved)
    }

    fn resolve_profile(
        active: &str,
        prof: &Profile,
        cf: &ConfigFile,
    ) -> Result<ResolvedConfig, ConfigError> {
        let docs_root = expand_path(&prof.docs_root)?;
        let excluded_folders =
            prof.excluded_folders.iter().map(|f| expand_path(f)).collect::<Result<_, _>>()?;

        // Resolve log file path if present
        let logging = if let Some(ref file) = cf.logging.file {
            LoggingConfig {
                level: cf.logging.level.clone(),
                file_level: cf.logging.file_level.clone(),
                file: Some(expand_path(&file.to_string_lossy())?),
            }
        } else {
            cf.logging.clone()
        };

        Ok(ResolvedConfig {
            active_profile: active.to_string(),
            config_path: None,
            docs_root,
            glob: prof.glob.clone(),
            max_depth: prof.max_depth,
            summary_length: prof.summary_length,
            excluded_folders,
            search: cf.search.clone(),
            glossary: cf.glossary.clone(),
            logging,
        })
    }
}

fn read_config(path: &Path) -> Result<ConfigFile, ConfigError> {
    let s = fs::read_to_string(path)
        .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

    toml::from_str(&s).map_err(|e| ConfigError::ParseError(path.display().to_string(), e))
}

fn builtin_config() -> ConfigFile {
    ConfigFile {
        version: 1,
        profile: None,
        profiles: HashMap::from([("default".to_string(), Profile::default())]),
        search: Default::default(),
        glossary: BTreeMap::new(),
        logging: LoggingConfig::default(),
    }
}

/// `DOCS_ROOT`, `DOCS_GLOB`, `MAX_DEPTH` and `SUMMARY_LENGTH` replace profile
/// values. Empty variables are ignored.
fn apply_env_overrides(
    prof: &mut Profile,
    env: &impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    let get = |key: &str| env(key).filter(|v| !v.trim().is_empty());

    if let Some(root) = get("DOCS_ROOT") {
        prof.docs_root = root;
    }
    if let Some(glob) = get("DOCS_GLOB") {
        prof.glob = glob;
    }
    if let Some(value) = get("MAX_DEPTH") {
        prof.max_depth = parse_env("MAX_DEPTH", &value)?;
    }
    if let Some(value) = get("SUMMARY_LENGTH") {
        prof.summary_length = parse_env("SUMMARY_LENGTH", &value)?;
    }
    Ok(())
}

fn parse_env<T: std::str::FromStr>(var: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { var: var.to_string(), value: value.to_string() })
}

fn validate(rc: &ResolvedConfig) -> Result<(), ConfigError> {
    if !(1..=6).contains(&rc.max_depth) {
        return Err(ConfigError::Invalid(format!(
            "max_depth must be between 1 and 6, got {}",
            rc.max_depth
        )));
    }
    if rc.summary_length == 0 {
        return Err(ConfigError::Invalid("summary_length must be at least 1".into()));
    }
    if rc.glob.trim().is_empty() {
        return Err(ConfigError::Invalid("glob must not be empty".into()));
    }
    if !(rc.search.title_boost.is_finite() && rc.search.title_boost > 0.0) {
        return Err(ConfigError::Invalid(format!(
            "search.title_boost must be positive, got {}",
            rc.search.title_boost
        )));
    }
    if rc.search.snippet_length < 20 {
        return Err(ConfigError::Invalid(format!(
            "search.snippet_length must be at least 20, got {}",
            rc.search.snippet_length
        )));
    }
    Ok(())
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("doctree").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("doctree").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
