//! Fixed input/output locations, relative to the working directory.

use std::path::{Path, PathBuf};

/// Data Dragon champion summary read by the generator.
pub const DEFAULT_INPUT: &str = "champion.json";

/// Generated declaration.
pub const DEFAULT_OUTPUT: &str = "list.rs";

pub fn input_path(over: Option<PathBuf>) -> PathBuf {
    over.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
}

pub fn output_path(over: Option<PathBuf>) -> PathBuf {
    over.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
}

/// Sibling file the declaration is staged in before being renamed over `dest`.
pub fn staging_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    dest.with_file_name(name)
}
