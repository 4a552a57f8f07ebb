//! Command-line interface definitions for `merge_settings`.

use camino::Utf8PathBuf;
use clap::Parser;

/// Merge an arbitrary number of settings files ordered by priority.
///
/// Files are listed from lowest to highest priority; higher priority
/// settings override lower priority ones, recursively for nested mappings.
/// Keys present in the last file are guaranteed to appear in the output.
/// The merged settings document is written to standard output.
#[derive(Debug, Parser)]
#[command(name = "merge_settings")]
#[command(version)]
pub struct Args {
    /// Settings files, lowest priority first. Files that do not exist are
    /// skipped with a warning on stderr.
    #[arg(value_name = "SETTINGS_FILE")]
    pub settings_files: Vec<Utf8PathBuf>,
}
