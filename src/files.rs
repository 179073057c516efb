//! Filesystem access.
//!
//! The runner is the only caller: lint rules see a [`FileStat`] snapshot and
//! never touch the disk themselves.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Utc};

use crate::error::{FmlintError, Result};
use crate::lint::FileStat;

/// Read a file's timestamps.
pub fn read_stat(path: &Path) -> Result<FileStat> {
    let metadata = fs::metadata(path).map_err(|e| FmlintError::io(path, e))?;
    FileStat::from_metadata(&metadata).map_err(|e| FmlintError::io(path, e))
}

/// Read a file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| FmlintError::io(path, e))
}

/// Whether `path` has one of `extensions`.
///
/// Extensions are compared case-insensitively, with or without a leading
/// dot.
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
}

/// List the regular files directly inside `dir` with one of `extensions`.
///
/// Subdirectories are not descended into. The result is sorted by path.
pub fn list_files(dir: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(FmlintError::PathNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| FmlintError::io(dir, e))? {
        let entry = entry.map_err(|e| FmlintError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && has_extension(&path, extensions) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Replace the contents of `path` atomically and stamp its mtime.
///
/// The new contents go to a hidden temp file next to `path`, which gets
/// `modified` as its mtime and the original permissions before it is renamed
/// over `path`. Readers see either the old file or the new contents with the
/// new mtime, never a mix.
pub fn write_atomic(path: &Path, contents: &str, modified: DateTime<Utc>) -> Result<()> {
    let temp_path = temp_path_for(path);
    let permissions = fs::metadata(path).ok().map(|m| m.permissions());

    let result = write_stamped(&temp_path, contents, modified)
        .and_then(|()| match permissions {
            Some(permissions) => fs::set_permissions(&temp_path, permissions),
            None => Ok(()),
        })
        .and_then(|()| fs::rename(&temp_path, path));

    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(FmlintError::io(path, e));
    }
    Ok(())
}

fn write_stamped(path: &Path, contents: &str, modified: DateTime<Utc>) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.set_modified(SystemTime::from(modified))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}
