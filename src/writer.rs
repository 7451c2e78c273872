//! Writing the completion index to disk

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::completion::OutputDocument;
use crate::error::{GeneratorError, Result};

/// Serialize `document` as pretty JSON and replace `path` with it
///
/// The document is written to a sibling temporary file first and then
/// renamed over the target, so readers never observe a partial file.
pub fn write_document(path: &Path, document: &OutputDocument) -> Result<()> {
    let data = serde_json::to_string_pretty(document).map_err(GeneratorError::Serialize)?;
    let write_error = |source: std::io::Error| GeneratorError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, data.as_bytes()).map_err(write_error)?;
    if let Err(source) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(write_error(source));
    }

    debug!("Wrote {} bytes to {:?}", data.len(), path);
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("completions"));
    name.push(".tmp");
    path.with_file_name(name)
}
