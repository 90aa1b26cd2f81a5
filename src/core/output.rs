//! Destination file handling: whole-file replace and read-back.

use std::fs;
use std::io;
use std::path::Path;

use crate::core::error::GenError;
use crate::core::paths;

/// Replace `dest` with `contents`. The text is written to a staging file first and renamed
/// into place, so a failure never leaves a half-written declaration behind.
pub fn write_replacing(dest: &Path, contents: &str) -> Result<(), GenError> {
    let tmp = paths::staging_path(dest);
    if let Err(e) = fs::write(&tmp, contents).and_then(|()| fs::rename(&tmp, dest)) {
        let _ = fs::remove_file(&tmp);
        return Err(GenError::io(dest, e));
    }
    log::debug!("replaced {} ({} bytes)", dest.display(), contents.len());
    Ok(())
}

/// Current contents of `path`, or `None` when it does not exist yet.
pub fn read_existing(path: &Path) -> Result<Option<String>, GenError> {
    match fs::read_to_string(path) {
        Ok(s) => Ok(Some(s)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(GenError::io(path, e)),
    }
}
