//! In-place extraction of zip, tar and gzip archives found under a directory.
//!
//! # Architecture
//!
//! - `format.rs` - Extension-based classification and gzip output naming
//! - `sanitize.rs` - Path containment (zip-slip prevention)
//! - `extract/` - Per-format extractors and the gzip-then-tar chain
//! - `walk.rs` - Recursive discovery, dispatch and cleanup
//! - `entry.rs` - Reports returned by every step

pub use entry::{ArchiveReport, Entry, EntryKind, Extraction, GzipReport, StepReport};
pub use error::{Error, Result};
pub use extract::{extract_gzip, extract_into, extract_path, extract_tar, extract_zip};
pub use format::{ArchiveFormat, FormatTag};
pub use options::{ExtractOptions, WalkOptions};
pub use sanitize::{SanitizedPath, sanitize_path};
pub use walk::{WalkReport, walk};

pub mod entry;
pub mod extract;
pub mod format;
pub mod options;
mod error;
mod sanitize;
mod walk;
