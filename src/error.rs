//! Fatal file errors shared by the normalizer and the game
//!
//! Every variant aborts the command that hit it; nothing here is retried.

use derive_more::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error reading or writing a word list file
#[derive(Debug, Display)]
pub enum SourceError {
    #[display("Input file '{}' not found", _0.display())]
    MissingInputFile(PathBuf),
    #[display("Input file '{}' is not valid UTF-8", _0.display())]
    UnreadableEncoding(PathBuf),
    #[display("No valid 5-letter words found in '{}'", _0.display())]
    EmptyWordList(PathBuf),
    #[display("I/O error on '{}': {}", _0.display(), _1)]
    Io(PathBuf, io::Error),
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(_, err) => Some(err),
            _ => None,
        }
    }
}

impl SourceError {
    /// Wrap an I/O error, mapping `NotFound` to [`SourceError::MissingInputFile`]
    #[must_use]
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Self::MissingInputFile(path.to_path_buf())
        } else {
            Self::Io(path.to_path_buf(), err)
        }
    }
}

/// Read a whole file as UTF-8 text
///
/// The handle is closed before this returns.
///
/// # Errors
///
/// Returns `MissingInputFile` if the path does not exist, `UnreadableEncoding`
/// if the bytes are not UTF-8, and `Io` for any other read failure.
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    let bytes = fs::read(path).map_err(|e| SourceError::from_io(path, e))?;
    String::from_utf8(bytes).map_err(|_| SourceError::UnreadableEncoding(path.to_path_buf()))
}
