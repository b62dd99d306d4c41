//! Where translation data is read from.

use std::path::{
    Path,
    PathBuf,
};

use crate::error::InitError;

/// File name of the bundled dataset.
pub const DEFAULT_DATA_FILE: &str = "sample.json";

/// The bundled dataset, compiled into the crate.
const BUNDLED_DATA: &str = include_str!("../data/sample.json");

/// Reference to a source artifact holding the JSON country array.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DataSource {
    /// A JSON file on disk.
    File(PathBuf),

    /// JSON text already in memory.
    Json(String),

    /// The `sample.json` dataset shipped with the crate.
    #[default]
    Bundled,
}

impl DataSource {
    /// Shorthand for [`DataSource::File`].
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Read the whole document.
    ///
    /// The file handle is closed before this returns, whether or not the read
    /// succeeded.
    ///
    /// # Errors
    /// Returns [`InitError::Io`] if the file cannot be read.
    pub fn read(&self) -> Result<String, InitError> {
        match self {
            Self::File(path) => read_file(path),
            Self::Json(text) => Ok(text.clone()),
            Self::Bundled => Ok(BUNDLED_DATA.to_string()),
        }
    }

    /// Human-readable name for log output.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Json(_) => "<inline json>".to_string(),
            Self::Bundled => format!("<bundled {DEFAULT_DATA_FILE}>"),
        }
    }
}

/// Read a data file into memory.
fn read_file(path: &Path) -> Result<String, InitError> {
    tracing::debug!("Reading translation data from: {:?}", path);

    std::fs::read_to_string(path)
        .map_err(|source| InitError::Io { path: path.to_path_buf(), source })
}
