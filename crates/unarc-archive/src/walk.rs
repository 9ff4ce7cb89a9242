//! Recursive discovery and dispatch.
//!
//! Failing to read the tree aborts the walk; failing to extract one archive
//! is logged and the walk moves on.

use std::fs;
use std::path::Path;

use tracing::{error, info, warn};
use walkdir::WalkDir;

use crate::entry::Extraction;
use crate::error::{Error, Result};
use crate::extract::extract_into;
use crate::format::FormatTag;
use crate::options::WalkOptions;

/// Counters for a finished walk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalkReport {
    /// Archive references whose every step succeeded.
    pub extracted: usize,
    /// Archive references where some step failed.
    pub failed: usize,
    /// Regular files with an unrecognized extension.
    pub skipped: usize,
    pub deleted: usize,
    pub delete_failures: usize,
    pub bytes_written: u64,
}

/// Walk `root`, extracting every recognized archive next to itself.
///
/// Each directory is listed once, in file-name order, before its entries are
/// handled, so files produced during the walk are not picked up again.
pub fn walk(root: impl AsRef<Path>, options: &WalkOptions) -> Result<WalkReport> {
    let root = root.as_ref();
    let mut report = WalkReport::default();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Traversal {
            path: e.path().unwrap_or(root).to_path_buf(),
            source: e,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let tag = FormatTag::from_path(path);
        if !tag.is_recognized() {
            report.skipped += 1;
            if options.is_verbose() {
                info!(
                    "skipping {} as extension is {:?}",
                    path.display(),
                    path.extension().unwrap_or_default()
                );
            }
            continue;
        }

        let mut extraction = Extraction::default();
        match extract_into(path, tag, &options.extract, &mut extraction) {
            Ok(()) => report.extracted += 1,
            Err(e) => {
                report.failed += 1;
                error!("unable to extract '{}': {e}", path.display());
            }
        }
        report.bytes_written += extraction.bytes_written();

        if options.delete_on_success {
            cleanup(&extraction, options, &mut report);
        }
    }

    Ok(report)
}

/// Delete every input whose step succeeded. Failures only warn.
fn cleanup(extraction: &Extraction, options: &WalkOptions, report: &mut WalkReport) {
    for consumed in &extraction.consumed {
        match fs::remove_file(consumed) {
            Ok(()) => {
                report.deleted += 1;
                if options.is_verbose() {
                    info!("file {} deleted", consumed.display());
                }
            }
            Err(e) => {
                report.delete_failures += 1;
                warn!("unable to delete {}: {e}", consumed.display());
            }
        }
    }
}
