use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to access path '{path}': {source}")]
    Traversal {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("unable to read zip container: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("archive '{path}' is corrupted: {source}")]
    Corrupted { path: PathBuf, source: io::Error },

    #[error("zip-slip attack detected: entry '{entry}' resolves to '{resolved}'")]
    ZipSlip { entry: PathBuf, resolved: PathBuf },

    #[error("cannot derive an output name from '{path}'")]
    NoOutputName { path: PathBuf },

    #[error("failed to extract '{path}': {source}")]
    ExtractionFailed { path: PathBuf, source: io::Error },

    #[error("failed to create directory: {path}: {source}")]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether this error should abort a whole walk rather than a single archive.
    pub fn is_traversal(&self) -> bool {
        matches!(self, Self::Traversal { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
