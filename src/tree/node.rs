//! Tree entry (node) definition and directory listing

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TreeError};

/// A single listed child of a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Full path to the entry
    pub path: PathBuf,
    /// Raw entry name, as returned by the filesystem
    pub name: OsString,
    /// Whether this is a real directory (symlinks are never directories)
    pub is_dir: bool,
}

impl TreeEntry {
    /// Display name, lossily converted for output
    pub fn display_name(&self) -> std::borrow::Cow<'_, str> {
        self.name.to_string_lossy()
    }
}

/// List the direct children of `dir`, sorted by raw name.
///
/// The directory check uses the entry's own file type and does not follow
/// symlinks, so a link to a directory is listed as a leaf.
pub fn list_entries(dir: &Path) -> Result<Vec<TreeEntry>> {
    let read_dir = fs::read_dir(dir).map_err(|e| TreeError::from_io(dir, e))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| TreeError::from_io(dir, e))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| TreeError::from_io(&path, e))?;

        entries.push(TreeEntry {
            name: entry.file_name(),
            is_dir: file_type.is_dir(),
            path,
        });
    }

    // OsStr ordering is byte order on Unix; no locale collation
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    log::debug!("listed {} ({} entries)", dir.display(), entries.len());
    Ok(entries)
}
