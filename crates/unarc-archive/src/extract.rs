//! Archive extraction for zip, tar and gzip sources.
//!
//! Every extractor writes into the directory holding its source file. Zip and
//! tar share one pipeline: an [`EntrySource`] yields entries in container
//! order and [`extract_with_source`] sanitizes, writes and reports each one.
//! The first failing entry aborts the archive; entries already written stay.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::entry::{ArchiveReport, Entry, EntryKind, Extraction, StepReport};
use crate::error::{Error, Result};
use crate::format::{self, FormatTag};
use crate::options::ExtractOptions;
use crate::sanitize::sanitize_path;

mod gzip;
mod tar;
mod zip;

pub use self::gzip::extract_gzip;
pub use self::tar::{TarSource, extract_tar};
pub use self::zip::{ZipSource, extract_zip};

/// An entry read from an archive but not yet written.
pub struct PendingEntry<'a> {
    pub original_path: PathBuf,
    pub kind: EntryKind,
    pub reader: &'a mut dyn Read,
}

/// Archive-specific entry source.
pub trait EntrySource {
    /// Hand every entry to `visit` in container order, stopping at the first error.
    fn for_each_entry(&mut self, visit: &mut dyn FnMut(PendingEntry<'_>) -> Result<()>) -> Result<()>;
    fn format(&self) -> format::ArchiveFormat;
}

/// Directory that receives the output of `source`: its parent.
pub fn extraction_target(source: &Path) -> PathBuf {
    match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Main extraction pipeline.
pub fn extract_with_source<S: EntrySource>(
    source: &mut S,
    source_path: &Path,
    destination: &Path,
    options: &ExtractOptions,
) -> Result<ArchiveReport> {
    ensure_directory(destination, options)?;

    let mut entries = Vec::new();
    source.for_each_entry(&mut |mut pending: PendingEntry<'_>| -> Result<()> {
        let sanitized = sanitize_path(&pending.original_path, destination)?;
        let written = write_entry(&mut pending, &sanitized.resolved, options)?;
        entries.push(
            Entry::new(sanitized.original, pending.kind)
                .with_target_path(sanitized.resolved)
                .with_bytes_written(written),
        );
        Ok(())
    })?;

    if options.verbose {
        info!("file {} extracted", source_path.display());
    }
    Ok(ArchiveReport::new(source.format(), source_path, destination, entries))
}

fn write_entry(pending: &mut PendingEntry<'_>, target_path: &Path, options: &ExtractOptions) -> Result<u64> {
    match pending.kind {
        EntryKind::File => write_file(&mut *pending.reader, target_path, options),
        EntryKind::Directory => {
            ensure_directory(target_path, options)?;
            if options.verbose {
                info!("created dir {}", target_path.display());
            }
            Ok(0)
        }
        EntryKind::Other(type_byte) => {
            info!(
                "unknown entry type {:?} for file {}, skipping",
                type_byte as char,
                target_path.display()
            );
            Ok(0)
        }
    }
}

/// Stream `reader` into a freshly created (or truncated) file at `target_path`.
pub(crate) fn write_file(reader: &mut dyn Read, target_path: &Path, options: &ExtractOptions) -> Result<u64> {
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent, options)?;
        }
    }

    let mut file = fs::File::create(target_path).map_err(|e| Error::ExtractionFailed {
        path: target_path.to_path_buf(),
        source: e,
    })?;
    let written = io::copy(reader, &mut file).map_err(|e| Error::ExtractionFailed {
        path: target_path.to_path_buf(),
        source: e,
    })?;

    if options.verbose {
        info!("{written} bytes written for file {}", target_path.display());
    }
    Ok(written)
}

pub(crate) fn ensure_directory(path: &Path, options: &ExtractOptions) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(options.dir_mode);
    }
    #[cfg(not(unix))]
    let _ = options;

    builder.create(path).map_err(|e| Error::DirectoryCreationFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Run every step a format tag calls for, recording successes in `extraction`.
///
/// Gzip output feeds the tar step: `.tgz` always chains, `.gz` only when the
/// derived name ends in `.tar`. A failed step ends the chain and its error is
/// returned; steps that already succeeded stay recorded so their inputs remain
/// eligible for cleanup.
pub fn extract_into(
    path: &Path,
    tag: FormatTag,
    options: &ExtractOptions,
    extraction: &mut Extraction,
) -> Result<()> {
    match tag {
        FormatTag::Zip => extraction.push(StepReport::Archive(extract_zip(path, options)?)),
        FormatTag::Tar => extraction.push(StepReport::Archive(extract_tar(path, options)?)),
        FormatTag::Gzip | FormatTag::TarGzip => {
            let gzip = extract_gzip(path, options)?;
            let output = gzip.output.clone();
            extraction.push(StepReport::Gzip(gzip));

            if tag == FormatTag::TarGzip || format::is_tar_name(&output) {
                extraction.push(StepReport::Archive(extract_tar(&output, options)?));
            }
        }
        FormatTag::Unrecognized => {}
    }
    Ok(())
}

/// Classify `path` by extension and extract it.
///
/// Returns an empty [`Extraction`] for unrecognized extensions.
pub fn extract_path(path: &Path, options: &ExtractOptions) -> Result<Extraction> {
    let mut extraction = Extraction::default();
    extract_into(path, FormatTag::from_path(path), options, &mut extraction)?;
    Ok(extraction)
}
