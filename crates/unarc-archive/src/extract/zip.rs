use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};

use crate::entry::{ArchiveReport, EntryKind};
use crate::error::{Error, Result};
use crate::extract::{EntrySource, PendingEntry, extract_with_source, extraction_target};
use crate::format;
use crate::options::ExtractOptions;

pub struct ZipSource<R: Read + Seek> {
    archive: zip::ZipArchive<R>,
}

impl<R: Read + Seek> ZipSource<R> {
    /// Read the central directory; fails when the container index is unreadable.
    pub fn new(reader: R) -> Result<Self> {
        let archive = zip::ZipArchive::new(reader)?;
        Ok(Self { archive })
    }

    pub fn len(&self) -> usize {
        self.archive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }
}

impl<R: Read + Seek> EntrySource for ZipSource<R> {
    fn for_each_entry(&mut self, visit: &mut dyn FnMut(PendingEntry<'_>) -> Result<()>) -> Result<()> {
        for index in 0..self.archive.len() {
            let mut file = self.archive.by_index(index)?;

            // Raw name on purpose: containment is checked by the pipeline.
            let original_path = PathBuf::from(file.name());
            let kind = if file.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };

            visit(PendingEntry {
                original_path,
                kind,
                reader: &mut file,
            })?;
        }
        Ok(())
    }

    fn format(&self) -> format::ArchiveFormat {
        format::ArchiveFormat::Zip
    }
}

/// Extract a zip file next to itself.
pub fn extract_zip(path: &Path, options: &ExtractOptions) -> Result<ArchiveReport> {
    let file = File::open(path).map_err(|e| Error::ExtractionFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut source = ZipSource::new(BufReader::new(file))?;
    extract_with_source(&mut source, path, &extraction_target(path), options)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use zip::write::SimpleFileOptions;

    use super::*;

    fn sample_zip() -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        writer.add_directory("docs/", options).unwrap();
        writer.start_file("docs/readme.txt", options).unwrap();
        writer.write_all(b"read me\n").unwrap();
        writer.start_file("top.txt", options).unwrap();
        writer.write_all(b"top\n").unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn zip_source_visits_entries_in_order() {
        let mut source = ZipSource::new(Cursor::new(sample_zip())).unwrap();
        assert_eq!(source.len(), 3);

        let mut seen = Vec::new();
        source
            .for_each_entry(&mut |pending: PendingEntry<'_>| -> Result<()> {
                let mut content = String::new();
                pending.reader.read_to_string(&mut content)?;
                seen.push((pending.original_path, pending.kind, content));
                Ok(())
            })
            .unwrap();

        assert_eq!(seen[0].0, PathBuf::from("docs/"));
        assert_eq!(seen[0].1, EntryKind::Directory);
        assert_eq!(seen[1].0, PathBuf::from("docs/readme.txt"));
        assert_eq!(seen[1].2, "read me\n");
        assert_eq!(seen[2].0, PathBuf::from("top.txt"));
        assert_eq!(seen[2].1, EntryKind::File);
    }

    #[test]
    fn zip_source_rejects_garbage() {
        let result = ZipSource::new(Cursor::new(b"definitely not a zip".to_vec()));
        assert!(matches!(result, Err(Error::Zip(_))));
    }

    #[test]
    fn zip_visit_error_stops_iteration() {
        let mut source = ZipSource::new(Cursor::new(sample_zip())).unwrap();
        let mut visited = 0;
        let result = source.for_each_entry(&mut |_pending: PendingEntry<'_>| -> Result<()> {
            visited += 1;
            Err(Error::NoOutputName {
                path: PathBuf::from("stop"),
            })
        });
        assert!(result.is_err());
        assert_eq!(visited, 1);
    }
}
