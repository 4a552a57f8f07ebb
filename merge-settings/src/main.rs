//! CLI entrypoint for `merge_settings`.
//!
//! Reads an ordered list of settings files, lowest priority first, folds
//! them through the hierarchical merger, and writes the merged document to
//! stdout. Missing inputs are skipped with a stderr warning rather than
//! failing the run; malformed inputs propagate and exit non-zero.

mod cli;
mod error;

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use strata_settings::Settings;

use crate::cli::Args;
use crate::error::MergeError;

fn main() -> Result<(), MergeError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    run(&Args::parse())
}

fn run(args: &Args) -> Result<(), MergeError> {
    let present = filter_present(&args.settings_files)?;
    match present.as_slice() {
        [] => write_stdout(Settings::default().dump()?.as_bytes()),
        [only] => {
            // Byte-for-byte passthrough keeps human-authored comments that a
            // parse/re-serialize cycle would destroy.
            let raw =
                std::fs::read(only).map_err(|source| MergeError::read(only.to_path_buf(), source))?;
            write_stdout(&raw)
        }
        many => {
            let mut layers = Vec::with_capacity(many.len());
            for path in many {
                layers.push(Settings::from_path(path)?);
            }
            let merged = Settings::merged(&layers);
            write_stdout(merged.dump()?.as_bytes())
        }
    }
}

/// Keep the inputs that exist, warning on stderr for each skipped path.
///
/// A missing file contributes nothing to the merge, consistent with the
/// loader treating absent documents as empty.
fn filter_present(paths: &[Utf8PathBuf]) -> Result<Vec<&Utf8PathBuf>, MergeError> {
    let mut present = Vec::with_capacity(paths.len());
    let mut stderr = std::io::stderr().lock();
    for path in paths {
        if path.is_file() {
            present.push(path);
        } else {
            writeln!(stderr, "warning: skipping missing settings file: {path}")
                .map_err(MergeError::Stderr)?;
        }
    }
    Ok(present)
}

fn write_stdout(bytes: &[u8]) -> Result<(), MergeError> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(bytes).map_err(MergeError::Stdout)?;
    stdout.flush().map_err(MergeError::Stdout)
}
