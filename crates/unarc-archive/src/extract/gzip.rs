use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::info;

use crate::entry::GzipReport;
use crate::error::{Error, Result};
use crate::extract::write_file;
use crate::format::gzip_output_path;
use crate::options::ExtractOptions;

/// Decompress a gzip file to its name minus one extension, in the same directory.
///
/// Concatenated members are decoded as one stream. The header is parsed
/// before the output is created, so an invalid file leaves nothing behind.
pub fn extract_gzip(path: &Path, options: &ExtractOptions) -> Result<GzipReport> {
    let output = gzip_output_path(path)?;

    let file = File::open(path).map_err(|e| Error::ExtractionFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::new(MultiGzDecoder::new(file));
    reader.fill_buf().map_err(|e| Error::Corrupted {
        path: path.to_path_buf(),
        source: e,
    })?;

    let (original_name, mtime) = match reader.get_ref().header() {
        Some(header) => (
            header.filename().map(|name| String::from_utf8_lossy(name).into_owned()),
            header.mtime(),
        ),
        None => (None, 0),
    };
    if options.verbose {
        info!(
            "gzip header of {}: name {:?}, mtime {}",
            path.display(),
            original_name.as_deref().unwrap_or(""),
            mtime
        );
    }

    let bytes_written = write_file(&mut reader, &output, options)?;

    Ok(GzipReport {
        source: path.to_path_buf(),
        output,
        bytes_written,
        original_name,
        mtime,
    })
}
