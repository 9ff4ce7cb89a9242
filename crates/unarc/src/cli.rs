use std::path::PathBuf;

use clap::Parser;
use unarc_archive::WalkOptions;

#[derive(Clone, Debug, Parser)]
#[command(
    name = "unarc",
    version = env!("CARGO_PKG_VERSION"),
    about = "Extract every .zip, .tar, .gz and .tgz under a directory next to its archive",
    long_about = None
)]
pub struct App {
    /// Directory to scan recursively
    pub dir: PathBuf,

    /// Log every entry written, directory created and file skipped
    #[arg(short, long)]
    pub verbose: bool,

    /// Delete archives (and intermediate tar files) once extracted successfully
    #[arg(short, long)]
    pub delete: bool,
}

impl App {
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions::default()
            .delete_on_success(self.delete)
            .verbose(self.verbose)
    }
}
