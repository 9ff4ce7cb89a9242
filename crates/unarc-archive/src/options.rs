/// Mode for directories created during extraction (`rwxr-xr-x`).
pub const DEFAULT_DIR_MODE: u32 = 0o755;

/// Per-archive extraction settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Report every entry (bytes written, directories created, skipped types).
    pub verbose: bool,
    /// Unix mode for created directories; ignored elsewhere.
    pub dir_mode: u32,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            dir_mode: DEFAULT_DIR_MODE,
        }
    }
}

impl ExtractOptions {
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn dir_mode(mut self, mode: u32) -> Self {
        self.dir_mode = mode;
        self
    }
}

/// Settings for a whole directory walk, fixed for the duration of the run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Delete each source once the step consuming it has succeeded.
    pub delete_on_success: bool,
    pub extract: ExtractOptions,
}

impl WalkOptions {
    pub fn delete_on_success(mut self, delete: bool) -> Self {
        self.delete_on_success = delete;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.extract = self.extract.verbose(verbose);
        self
    }

    pub fn is_verbose(&self) -> bool {
        self.extract.verbose
    }
}
