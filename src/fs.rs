//! Filesystem predicates and small file I/O helpers.
//!
//! Existence checks never error; the I/O helpers propagate [`Error`] with
//! the offending path attached. Writes are not atomic.

use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Trailing `?query` and/or `#fragment` suffix on a path-like string.
static REQUEST_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?#].*$").unwrap());

fn strip_request_suffix(path: &str) -> &str {
    match REQUEST_SUFFIX.find(path) {
        Some(m) => &path[..m.start()],
        None => path,
    }
}

/// Check whether a regular file exists at `path`.
///
/// A trailing `?query` and/or `#fragment` suffix is stripped before the
/// check, so request-style paths like `lib.js?v=2#main` resolve to the
/// underlying file. Returns `false` for directories and on any error.
pub fn is_existing_file(path: &str) -> bool {
    Path::new(strip_request_suffix(path)).is_file()
}

/// Check whether a directory exists at the *exact* `path`.
///
/// Unlike [`is_existing_file`], no suffix stripping is performed: a path
/// carrying `?...`/`#...` is reported as non-existent even when the base
/// path is a real directory.
pub fn is_existing_dir(path: &str) -> bool {
    Path::new(path).is_dir()
}

/// Read the full UTF-8 contents of a file.
///
/// A missing or unreadable file propagates an error; no default is
/// substituted.
pub fn read_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| Error::Io(path.to_path_buf(), e))
}

/// Write `content` to `path`, creating any missing parent directories.
///
/// Overwrites existing content.
pub fn write_file(path: impl AsRef<Path>, content: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::Io(parent.to_path_buf(), e))?;
    }
    fs::write(path, content).map_err(|e| Error::Io(path.to_path_buf(), e))?;
    tracing::debug!(path = %path.display(), "wrote file");
    Ok(())
}

/// Delete the file or recursively delete the directory at `path`.
///
/// A missing path is a no-op success.
pub fn remove(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(Error::Io(path.to_path_buf(), e)),
    };
    let removed = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    removed.map_err(|e| Error::Io(path.to_path_buf(), e))?;
    tracing::debug!(path = %path.display(), "removed");
    Ok(())
}
