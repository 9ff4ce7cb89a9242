use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use tracing::info;
use tracing_subscriber::EnvFilter;
use unarc_archive::{WalkReport, walk};

use crate::cli::App;

mod cli;

/// Exit status for bad arguments or `--help`, so scripts never pass silently.
const USAGE: u8 = 1;
/// Exit status when the directory tree could not be read.
const WALK_FAILED: u8 = 2;

fn main() -> ExitCode {
    let app = match App::try_parse() {
        Ok(app) => app,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(USAGE),
            };
        }
    };

    init_logging(app.verbose);

    match run(&app) {
        Ok(report) => {
            info!(
                "{} archives extracted, {} failed, {} files skipped, {} deleted, {} bytes written",
                report.extracted, report.failed, report.skipped, report.deleted, report.bytes_written
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(WALK_FAILED)
        }
    }
}

fn run(app: &App) -> anyhow::Result<WalkReport> {
    walk(&app.dir, &app.walk_options())
        .with_context(|| format!("error walking the path {:?}", app.dir))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
