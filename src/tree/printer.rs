//! Tree printer
//!
//! Walks a directory depth-first (pre-order) and writes one line per entry,
//! using `├── ` / `└── ` connectors and `│   ` / `    ` indentation.

use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use super::node::list_entries;
use super::prefix::{connector, Prefix, LAST_BRANCH};
use crate::error::{Result, TreeError};

/// Traversal options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeOptions {
    /// Replace the subtree of an unlistable subdirectory with a marker line
    /// instead of aborting. The root directory is never skipped.
    pub skip_unreadable: bool,
}

/// Output a directory tree to stdout
pub fn output_tree(root: &Path, options: TreeOptions) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    write_tree(&mut handle, root, options)?;

    handle.flush().map_err(TreeError::Output)
}

/// Write the header and the full tree for `root` to `out`.
///
/// `root` must be an existing directory; otherwise nothing is written.
pub fn write_tree<W: Write>(out: &mut W, root: &Path, options: TreeOptions) -> Result<()> {
    let root = resolve_root(root)?;
    log::info!("printing tree for {}", root.display());

    writeln!(out, "Directory Tree for: {}", root.display()).map_err(TreeError::Output)?;
    writeln!(out).map_err(TreeError::Output)?;

    print_tree(out, &root, &Prefix::root(), options)
}

/// Absolute form of `root` (symlinks are kept as written), checked to be a directory
fn resolve_root(root: &Path) -> Result<PathBuf> {
    let abs = std::path::absolute(root).map_err(|e| TreeError::from_io(root, e))?;
    let abs = normalize_lexically(&abs);
    let meta = fs::metadata(&abs).map_err(|e| TreeError::from_io(&abs, e))?;
    if !meta.is_dir() {
        return Err(TreeError::not_a_directory(abs));
    }
    Ok(abs)
}

/// Drop `.` and trailing separators and fold `..` into its parent,
/// without touching the filesystem
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if !matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                ) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Recursively print the children of `path`, each line starting with `prefix`
pub fn print_tree<W: Write>(
    out: &mut W,
    path: &Path,
    prefix: &Prefix,
    options: TreeOptions,
) -> Result<()> {
    let entries = list_entries(path)?;

    let count = entries.len();
    for (i, entry) in entries.iter().enumerate() {
        let is_last = i + 1 == count;

        writeln!(
            out,
            "{}{}{}",
            prefix,
            connector(is_last),
            entry.display_name()
        )
        .map_err(TreeError::Output)?;

        if !entry.is_dir {
            continue;
        }

        let child_prefix = prefix.child(is_last);
        match print_tree(out, &entry.path, &child_prefix, options) {
            Err(e) if options.skip_unreadable && !matches!(e, TreeError::Output(_)) => {
                log::warn!("skipping {}: {}", entry.path.display(), e);
                writeln!(
                    out,
                    "{}{}[unreadable: {}]",
                    child_prefix,
                    LAST_BRANCH,
                    e.reason()
                )
                .map_err(TreeError::Output)?;
            }
            result => result?,
        }
    }

    Ok(())
}
