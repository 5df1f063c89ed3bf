use std::path::PathBuf;

/// Represents all errors that can occur while reading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file is missing or unreadable.
    #[error("Error reading config file")]
    Unreadable {
        /// The configuration file.
        path:   PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file has no usable first line.
    #[error("Error reading config file")]
    Empty {
        /// The configuration file.
        path: PathBuf,
    },
}
