use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::{debug, warn};

use crate::{error::RuntimeError, interpreter::value::core::Matrix};

/// File extension of stored matrices.
pub const EXTENSION: &str = "matix";

/// Where `load` and `save` statements read and write named matrices.
///
/// The evaluator only ever exchanges plain rows of numbers with a store; it
/// narrows loaded rows itself.
pub trait MatrixStore {
    /// Reads the rows stored under `name`.
    ///
    /// # Errors
    /// `RuntimeError::FileNotFound` if nothing is stored under `name`.
    fn load(&self, name: &str) -> Result<Vec<Vec<f64>>, RuntimeError>;

    /// Stores `matrix` under `name`, replacing what was there.
    ///
    /// # Errors
    /// `RuntimeError::FileNotWritable` if the matrix cannot be persisted.
    fn save(&self, name: &str, matrix: &Matrix) -> Result<(), RuntimeError>;
}

/// Stores every matrix as a text file `<name>.matix` in one directory.
///
/// Each line of a file is a row; elements are separated by whitespace. A row
/// ends at the first token that is not a number, and an empty file holds the
/// empty matrix.
///
/// # Example
/// ```
/// use matix::{interpreter::value::core::Matrix, storage::{DirectoryStore, MatrixStore}};
///
/// let dir = tempfile::tempdir().unwrap();
/// let store = DirectoryStore::new(dir.path());
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.5]]).unwrap();
/// store.save("m", &m).unwrap();
/// assert_eq!(std::fs::read_to_string(dir.path().join("m.matix")).unwrap(), "1 2.5 \n");
/// assert_eq!(store.load("m").unwrap(), vec![vec![1.0, 2.5]]);
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    directory: PathBuf,
}

impl DirectoryStore {
    /// Creates a store rooted at `directory`. The directory is not touched
    /// until the first `load` or `save`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self { directory: directory.into() }
    }

    /// The directory the files live in.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn file_name(name: &str) -> String {
        format!("{name}.{EXTENSION}")
    }
}

/// Reads the leading numbers of one line.
///
/// # Example
/// ```
/// use matix::storage::parse_grid_row;
///
/// assert_eq!(parse_grid_row("1 -2.5\t3e2 x 4"), vec![1.0, -2.5, 300.0]);
/// assert!(parse_grid_row("").is_empty());
/// ```
#[must_use]
pub fn parse_grid_row(line: &str) -> Vec<f64> {
    line.split_whitespace()
        .map_while(|word| word.parse().ok())
        .collect()
}

impl MatrixStore for DirectoryStore {
    fn load(&self, name: &str) -> Result<Vec<Vec<f64>>, RuntimeError> {
        let file_name = Self::file_name(name);
        let path = self.directory.join(&file_name);
        debug!("loading '{name}' from {}", path.display());

        let contents = fs::read_to_string(&path).map_err(|error| {
                                                    if error.kind() != ErrorKind::NotFound {
                                                        warn!("cannot read {}: {error}", path.display());
                                                    }
                                                    RuntimeError::FileNotFound { path: file_name }
                                                })?;

        Ok(contents.lines().map(parse_grid_row).collect())
    }

    fn save(&self, name: &str, matrix: &Matrix) -> Result<(), RuntimeError> {
        let file_name = Self::file_name(name);
        let path = self.directory.join(&file_name);
        debug!("saving '{name}' to {}", path.display());

        fs::write(&path, matrix.to_string()).map_err(|error| {
                                                warn!("cannot write {}: {error}", path.display());
                                                RuntimeError::FileNotWritable { path: file_name }
                                            })
    }
}
