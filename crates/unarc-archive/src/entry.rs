use std::path::{Path, PathBuf};

use crate::format::ArchiveFormat;

/// Represents an archive entry during extraction.
#[derive(Clone, Debug)]
pub struct Entry {
    pub original_path: PathBuf,
    pub target_path: Option<PathBuf>,
    pub kind: EntryKind,
    /// Bytes written for files, zero otherwise.
    pub bytes_written: u64,
}

impl Entry {
    pub fn new(original_path: PathBuf, kind: EntryKind) -> Self {
        Self {
            original_path,
            target_path: None,
            kind,
            bytes_written: 0,
        }
    }

    pub fn with_target_path(mut self, target_path: PathBuf) -> Self {
        self.target_path = Some(target_path);
        self
    }

    pub fn with_bytes_written(mut self, bytes: u64) -> Self {
        self.bytes_written = bytes;
        self
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, EntryKind::File)
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }

    /// Entries that were logged and skipped.
    pub fn is_skipped(&self) -> bool {
        matches!(self.kind, EntryKind::Other(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Any tar entry type other than a regular file or directory, by type byte.
    Other(u8),
}

/// Outcome of a zip or tar extraction.
#[derive(Clone, Debug)]
pub struct ArchiveReport {
    pub format: ArchiveFormat,
    pub source: PathBuf,
    pub target: PathBuf,
    pub entry_count: usize,
    pub total_bytes: u64,
    pub entries: Vec<Entry>,
}

impl ArchiveReport {
    pub fn new(format: ArchiveFormat, source: &Path, target: &Path, entries: Vec<Entry>) -> Self {
        Self {
            format,
            source: source.to_path_buf(),
            target: target.to_path_buf(),
            entry_count: entries.len(),
            total_bytes: entries.iter().map(|e| e.bytes_written).sum(),
            entries,
        }
    }
}

/// Outcome of a gzip decompression.
#[derive(Clone, Debug)]
pub struct GzipReport {
    pub source: PathBuf,
    pub output: PathBuf,
    pub bytes_written: u64,
    /// File name stored in the gzip header, if any.
    pub original_name: Option<String>,
    /// Modification time stored in the gzip header, seconds since the epoch.
    pub mtime: u32,
}

/// Any single step of an extraction chain.
#[derive(Clone, Debug)]
pub enum StepReport {
    Archive(ArchiveReport),
    Gzip(GzipReport),
}

impl StepReport {
    pub fn bytes_written(&self) -> u64 {
        match self {
            Self::Archive(r) => r.total_bytes,
            Self::Gzip(r) => r.bytes_written,
        }
    }

    /// The input this step consumed.
    pub fn source(&self) -> &Path {
        match self {
            Self::Archive(r) => &r.source,
            Self::Gzip(r) => &r.source,
        }
    }
}

/// Result of dispatching one archive reference.
///
/// `consumed` lists every input whose extraction step succeeded, in order;
/// these are the only paths a cleanup pass may delete.
#[derive(Clone, Debug, Default)]
pub struct Extraction {
    pub steps: Vec<StepReport>,
    pub consumed: Vec<PathBuf>,
}

impl Extraction {
    pub fn push(&mut self, step: StepReport) {
        self.consumed.push(step.source().to_path_buf());
        self.steps.push(step);
    }

    pub fn bytes_written(&self) -> u64 {
        self.steps.iter().map(StepReport::bytes_written).sum()
    }
}
