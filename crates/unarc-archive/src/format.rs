use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Container kind of an extracted archive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    Tar,
}

/// Format tag derived from a file's final extension.
///
/// Classification is literal and case-sensitive: `a.ZIP` is unrecognized.
/// Only the last suffix counts, so `a.tar.gz` is [`FormatTag::Gzip`] and
/// becomes a tar extraction only once the gzip step has produced `a.tar`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatTag {
    Zip,
    Tar,
    Gzip,
    TarGzip,
    Unrecognized,
}

impl FormatTag {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(OsStr::to_str) {
            Some("zip") => Self::Zip,
            Some("tar") => Self::Tar,
            Some("gz") => Self::Gzip,
            Some("tgz") => Self::TarGzip,
            _ => Self::Unrecognized,
        }
    }

    pub fn is_compound(self) -> bool {
        matches!(self, Self::Gzip | Self::TarGzip)
    }

    pub fn is_recognized(self) -> bool {
        self != Self::Unrecognized
    }
}

/// Output path of a gzip extraction: the input with exactly one extension removed.
///
/// The decompressed content is never inspected, so `a.tgz` yields `a` and
/// not `a.tar`.
pub fn gzip_output_path(path: &Path) -> Result<PathBuf> {
    if path.extension().is_none() {
        return Err(Error::NoOutputName {
            path: path.to_path_buf(),
        });
    }
    Ok(path.with_extension(""))
}

/// Whether the gzip output should be fed to the tar extractor for a plain `.gz`.
pub fn is_tar_name(path: &Path) -> bool {
    path.extension() == Some(OsStr::new("tar"))
}
