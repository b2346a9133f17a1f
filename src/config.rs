//! Site configuration, read from TOML. Every field has a default, so an empty
//! file (or no file) is a valid configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::commands::types::DEFAULT_SITE_DOMAIN;
use crate::terminal::TerminalOptions;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Login name in the prompt; the home directory is `/home/<owner>`.
    pub owner: String,
    pub display_name: String,
    pub hostname: String,
    pub domain: String,
    pub content_dir: PathBuf,
    /// Language subdirectory of `content_dir` tried before the base files.
    pub language: Option<String>,
    /// Where the persisted mode flag lives.
    pub state_file: PathBuf,
    pub history_limit: usize,
    pub color: bool,
    /// Height of the GUI content pane, in lines.
    pub viewport: usize,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner: "sohaib".to_string(),
            display_name: "Sohaib Mokhliss".to_string(),
            hostname: "portfolio".to_string(),
            domain: DEFAULT_SITE_DOMAIN.to_string(),
            content_dir: PathBuf::from("content"),
            language: None,
            state_file: PathBuf::from(".folio-state.json"),
            history_limit: 1000,
            color: true,
            viewport: 20,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The file at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn terminal_options(&self) -> TerminalOptions {
        TerminalOptions {
            user: self.owner.clone(),
            host: self.hostname.clone(),
            display_name: self.display_name.clone(),
            domain: self.domain.clone(),
            history_limit: self.history_limit,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.owner, "sohaib");
        assert_eq!(config.domain, "portfolio.browncj.dev");
        assert_eq!(config.content_dir, PathBuf::from("content"));
        assert_eq!(config.language, None);
        assert!(config.color);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "owner = \"sam\"\nlanguage = \"fr\"\nhistory_limit = 50\ncolor = false").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.owner, "sam");
        assert_eq!(config.language.as_deref(), Some("fr"));
        assert_eq!(config.history_limit, 50);
        assert!(!config.color);
        assert_eq!(config.hostname, "portfolio");

        let options = config.terminal_options();
        assert_eq!(options.user, "sam");
        assert_eq!(options.history_limit, 50);
    }

    #[test]
    fn test_errors_carry_path() {
        let err = Config::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here.toml"));

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "history_limit = \"lots\"").unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
