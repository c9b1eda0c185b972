// src/config.rs
use serde::Deserialize;
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::VCardError;

pub const CONFIG_FILE_NAME: &str = "vcard.toml";

/// Settings read from `vcard.toml`. Command-line flags take precedence.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Match category labels case-insensitively.
    pub ignore_case: bool,
    /// Suppress the summary lines written to stderr.
    pub quiet: bool,
    /// `tracing` filter directive, e.g. `"info"` or `"vcard=debug"`.
    pub log_level: Option<String>,
}

impl Config {
    /// # Errors
    ///
    /// Returns an error if `content` is not valid TOML or has unknown keys.
    #[inline]
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// # Errors
    ///
    /// This function may return an error if:
    /// * The file cannot be read
    /// * The file is not a valid config
    #[inline]
    pub fn load(path: &Path) -> Result<Self, VCardError> {
        let content = fs::read_to_string(path).map_err(|source| VCardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| VCardError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Looks for `vcard.toml` in `dir`, then in each parent directory, stopping
/// at the first one found.
#[must_use]
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let candidate = current_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

/// Loads `explicit` if given, otherwise the nearest `vcard.toml` above the
/// current directory, otherwise the defaults.
///
/// # Errors
///
/// This function may return an error if:
/// * The current directory cannot be determined
/// * A config file exists but cannot be read or parsed
#[inline]
pub fn load_config(explicit: Option<&Path>) -> Result<Config, VCardError> {
    if let Some(path) = explicit {
        return Config::load(path);
    }

    let cwd = env::current_dir().map_err(|source| VCardError::Io {
        path: PathBuf::from("."),
        source,
    })?;
    match find_config(&cwd) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Using config file");
            Config::load(&path)
        }
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_config_deserialize() {
        let config = Config::from_toml("ignore_case = true\nlog_level = \"debug\"\n").unwrap();
        assert!(config.ignore_case);
        assert!(!config.quiet);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_config_empty_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_config_rejects_unknown_keys() {
        assert!(Config::from_toml("ignorecase = true").is_err());
    }

    #[test]
    fn test_find_config_in_parent() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let nested = temp_dir.path().join("a/b");
        fs::create_dir_all(&nested)?;
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "quiet = true\n")?;

        assert_eq!(find_config(&nested), Some(config_path.clone()));
        assert!(Config::load(&config_path)?.quiet);
        Ok(())
    }

    #[test]
    fn test_load_reports_bad_config() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "quiet = \"yes\"\n")?;

        let err = load_config(Some(&config_path)).unwrap_err();
        assert!(matches!(err, VCardError::Config { .. }));
        Ok(())
    }
}
