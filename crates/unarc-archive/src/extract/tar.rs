use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::entry::{ArchiveReport, EntryKind};
use crate::error::{Error, Result};
use crate::extract::{EntrySource, PendingEntry, extract_with_source, extraction_target};
use crate::format;
use crate::options::ExtractOptions;

pub struct TarSource<R: Read> {
    archive: tar::Archive<R>,
    path: PathBuf,
}

impl<R: Read> TarSource<R> {
    /// `path` only labels stream errors.
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            archive: tar::Archive::new(reader),
            path: path.into(),
        }
    }
}

impl<R: Read> EntrySource for TarSource<R> {
    fn for_each_entry(&mut self, visit: &mut dyn FnMut(PendingEntry<'_>) -> Result<()>) -> Result<()> {
        let path = self.path.clone();
        let corrupted = |source: std::io::Error| Error::Corrupted {
            path: path.clone(),
            source,
        };

        // End of stream is the success terminal state.
        for entry in self.archive.entries().map_err(corrupted)? {
            let mut entry = entry.map_err(corrupted)?;

            let original_path = entry.path().map_err(corrupted)?.into_owned();
            let entry_type = entry.header().entry_type();
            let kind = if entry_type.is_file() {
                EntryKind::File
            } else if entry_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::Other(entry_type.as_byte())
            };

            visit(PendingEntry {
                original_path,
                kind,
                reader: &mut entry,
            })?;
        }
        Ok(())
    }

    fn format(&self) -> format::ArchiveFormat {
        format::ArchiveFormat::Tar
    }
}

/// Extract a tar file next to itself.
pub fn extract_tar(path: &Path, options: &ExtractOptions) -> Result<ArchiveReport> {
    let file = File::open(path).map_err(|e| Error::ExtractionFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut source = TarSource::new(BufReader::new(file), path);
    extract_with_source(&mut source, path, &extraction_target(path), options)
}
