use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::error::ConfigError;

/// Working directory used when the configuration file cannot be read.
pub const DEFAULT_DIRECTORY: &str = "examples";

/// Configuration file read at startup unless `--config` names another.
pub const DEFAULT_CONFIG_PATH: &str = "examples/config.txt";

/// Startup settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the `.matix` files; also shown as the prompt.
    pub working_directory: PathBuf,
}

impl Config {
    /// Reads the configuration file. Its first line, trimmed, is the working
    /// directory.
    ///
    /// # Errors
    /// `ConfigError` if the file cannot be read or its first line is blank.
    ///
    /// # Example
    /// ```
    /// use matix::config::Config;
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let path = dir.path().join("config.txt");
    /// std::fs::write(&path, "  data/matrices \nignored\n").unwrap();
    ///
    /// let config = Config::load(&path).unwrap();
    /// assert_eq!(config.working_directory, std::path::Path::new("data/matrices"));
    /// assert!(Config::load(dir.path().join("missing.txt")).is_err());
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable { path: path.to_path_buf(),
                                                                                           source })?;

        let directory = contents.lines().next().map(str::trim).unwrap_or_default();
        if directory.is_empty() {
            return Err(ConfigError::Empty { path: path.to_path_buf() });
        }

        debug!("working directory '{directory}' from {}", path.display());
        Ok(Self { working_directory: PathBuf::from(directory) })
    }

    /// The prompt shown before each line: `<dir>> `.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("{}> ", self.working_directory.display())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { working_directory: PathBuf::from(DEFAULT_DIRECTORY) }
    }
}
