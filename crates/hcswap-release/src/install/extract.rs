//! Zip extraction with path-traversal protection
//!
//! Every entry name is resolved lexically against the destination before
//! anything is written. An entry that would land outside the destination,
//! or on the destination itself, aborts extraction.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("ARCHIVE_CORRUPT: {archive}: {reason}")]
    CorruptArchive { archive: PathBuf, reason: String },

    #[error("ARCHIVE_PATH_TRAVERSAL: entry '{entry}' resolves outside {dest}")]
    PathTraversal { entry: String, dest: PathBuf },

    #[error("IO_ERROR: failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: io::Error,
    },
}

/// Unpacks `archive_path` into `dest_dir`, creating it when missing
///
/// Entries are processed in archive order. Directory entries are created,
/// file entries are written with their stored unix mode when one is
/// recorded. Entries written before a failure stay on disk.
///
/// # Errors
///
/// - `CorruptArchive` if the file is not a readable zip
/// - `PathTraversal` if an entry escapes `dest_dir`
/// - `Io` on filesystem failures
pub fn extract(archive_path: &Path, dest_dir: &Path) -> Result<(), ExtractError> {
    let corrupt = |reason: String| ExtractError::CorruptArchive {
        archive: archive_path.to_path_buf(),
        reason,
    };

    let file = fs::File::open(archive_path).map_err(|e| ExtractError::Io {
        operation: format!("open archive {}", archive_path.display()),
        source: e,
    })?;

    let mut archive = zip::ZipArchive::new(file).map_err(|e| corrupt(e.to_string()))?;

    let dest: PathBuf = dest_dir.components().collect();
    fs::create_dir_all(&dest).map_err(|e| ExtractError::Io {
        operation: format!("create directory {}", dest.display()),
        source: e,
    })?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(|e| corrupt(e.to_string()))?;
        let name = entry.name().to_string();

        let outpath =
            resolve_entry_path(&dest, &name).ok_or_else(|| ExtractError::PathTraversal {
                entry: name.clone(),
                dest: dest.clone(),
            })?;

        if entry.is_dir() {
            fs::create_dir_all(&outpath).map_err(|e| ExtractError::Io {
                operation: format!("create directory {}", outpath.display()),
                source: e,
            })?;

            // Owner must keep write access so later entries can land inside
            if let Some(mode) = entry.unix_mode() {
                apply_mode(&outpath, mode | 0o700)?;
            }
            continue;
        }

        if let Some(parent) = outpath.parent() {
            fs::create_dir_all(parent).map_err(|e| ExtractError::Io {
                operation: format!("create parent directory {}", parent.display()),
                source: e,
            })?;
        }

        let mut outfile = fs::File::create(&outpath).map_err(|e| ExtractError::Io {
            operation: format!("create file {}", outpath.display()),
            source: e,
        })?;

        io::copy(&mut entry, &mut outfile).map_err(|e| {
            if e.kind() == io::ErrorKind::InvalidData {
                corrupt(format!("entry '{name}': {e}"))
            } else {
                ExtractError::Io {
                    operation: format!("extract file {}", outpath.display()),
                    source: e,
                }
            }
        })?;

        if let Some(mode) = entry.unix_mode() {
            apply_mode(&outpath, mode)?;
        }

        log::trace!("extracted {}", outpath.display());
    }

    Ok(())
}

/// Joins `name` onto `dest` without touching the filesystem
///
/// Returns `None` when the result is not strictly below `dest`.
fn resolve_entry_path(dest: &Path, name: &str) -> Option<PathBuf> {
    let floor = dest.components().count();
    let mut resolved = dest.to_path_buf();

    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if resolved.components().count() <= floor {
                    return None;
                }
                resolved.pop();
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    (resolved != dest).then_some(resolved)
}

#[cfg(unix)]
fn apply_mode(path: &Path, mode: u32) -> Result<(), ExtractError> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(mode & 0o7777)).map_err(|e| {
        ExtractError::Io {
            operation: format!("set permissions on {}", path.display()),
            source: e,
        }
    })
}

#[cfg(not(unix))]
fn apply_mode(_path: &Path, _mode: u32) -> Result<(), ExtractError> {
    Ok(())
}
