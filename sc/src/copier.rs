//! Recursive, fail-on-conflict file tree copy
//!
//! Every regular file under the source is visited once and written to the same
//! relative path under the target. Directories only come into existence as a
//! side effect of copying a file into them, so empty source directories are not
//! reproduced. Nothing is ever overwritten: an existing destination file aborts
//! the copy with [`ScaffoldError::TargetExists`], and whatever was copied before
//! the failure stays on disk.

use log::{debug, trace};
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Result, ScaffoldError};

/// Copy `source` to `target`, recursing into directories
///
/// A regular file is copied straight to `target`. A directory has each file
/// beneath it copied to the equivalent path under `target`.
pub fn copy_recursive(source: impl AsRef<Path>, target: impl AsRef<Path>) -> Result<()> {
    let source = source.as_ref();
    let target = target.as_ref();

    if source.is_file() {
        return copy_single(source, target);
    }

    let mut copied = 0usize;
    for relative in source_files(source) {
        let relative = relative?;
        copy_single(source.join(&relative), target.join(&relative))?;
        copied += 1;
    }

    debug!("Copied {} files from {} to {}", copied, source.display(), target.display());
    Ok(())
}

/// Copy one file, creating the target's missing ancestors first
///
/// Fails with [`ScaffoldError::TargetExists`] if `target` is already present.
pub fn copy_single(source: impl AsRef<Path>, target: impl AsRef<Path>) -> Result<()> {
    let source = source.as_ref();
    let target = target.as_ref();
    trace!("Copying {} -> {}", source.display(), target.display());

    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists | ErrorKind::NotADirectory => ScaffoldError::TargetExists {
                path: parent.to_path_buf(),
            },
            _ => ScaffoldError::io(parent, e),
        })?;
    }

    let mut reader = File::open(source).map_err(|e| ScaffoldError::io(source, e))?;
    let mut writer = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(target)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => ScaffoldError::TargetExists {
                path: target.to_path_buf(),
            },
            _ => ScaffoldError::io(target, e),
        })?;

    io::copy(&mut reader, &mut writer).map_err(|e| ScaffoldError::io(target, e))?;

    let permissions = reader
        .metadata()
        .map_err(|e| ScaffoldError::io(source, e))?
        .permissions();
    writer
        .set_permissions(permissions)
        .map_err(|e| ScaffoldError::io(target, e))?;

    Ok(())
}

/// Lazily walk `source`, yielding the path of every regular file relative to it
///
/// Symlinks are not followed and anything that is neither a file nor a
/// directory is skipped.
pub fn source_files(source: &Path) -> impl Iterator<Item = Result<PathBuf>> + '_ {
    WalkDir::new(source)
        .follow_links(false)
        .into_iter()
        .filter_map(move |entry| match entry {
            Err(e) => {
                let path = e.path().unwrap_or(source).to_path_buf();
                Some(Err(ScaffoldError::io(path, e.into())))
            }
            Ok(entry) if entry.file_type().is_file() => Some(
                entry
                    .path()
                    .strip_prefix(source)
                    .map(Path::to_path_buf)
                    .map_err(|e| ScaffoldError::io(entry.path(), io::Error::other(e))),
            ),
            Ok(entry) => {
                if !entry.file_type().is_dir() {
                    debug!("Skipping non-regular entry {}", entry.path().display());
                }
                None
            }
        })
}
