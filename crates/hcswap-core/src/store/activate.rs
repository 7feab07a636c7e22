//! Active link management
//!
//! A tool is active when `<bin_dir>/<tool>` is a symlink into one of its
//! version directories. Activation replaces whatever sits at that path.

use crate::tool::Tool;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::process::{Command, Stdio};
use thiserror::Error;

/// Activation errors
#[derive(Debug, Error)]
pub enum ActivateError {
    #[error("ACTIVATE_FAILED: could not create link directory {path}: {source}")]
    CreateBinDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("ACTIVATE_FAILED: could not remove existing {path}: {source}")]
    RemoveExisting {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("ACTIVATE_FAILED: could not link {link} -> {target}: {source}")]
    CreateLink {
        link: PathBuf,
        target: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Points `<bin_dir>/<tool>` at `<store_root>/<version>/<executable>`
///
/// The target is not checked for existence; a store whose archive did not
/// contain the executable yields a broken link.
///
/// # Returns
///
/// Path of the link that was created
pub fn activate(
    tool: Tool,
    store_root: &Path,
    version: &str,
    bin_dir: &Path,
) -> Result<PathBuf, ActivateError> {
    let target = store_root.join(version).join(tool.executable_name());
    let link = bin_dir.join(tool.canonical_name());

    match fs::symlink_metadata(&link) {
        Ok(metadata) => {
            log::debug!("replacing existing {}", link.display());
            let removed = if metadata.is_dir() {
                fs::remove_dir_all(&link)
            } else {
                fs::remove_file(&link)
            };
            removed.map_err(|e| ActivateError::RemoveExisting {
                path: link.clone(),
                source: e,
            })?;
        }
        // NotADirectory: a component of bin_dir is a file; create_dir_all reports it
        Err(e) if matches!(
            e.kind(),
            io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
        ) =>
        {
            fs::create_dir_all(bin_dir).map_err(|e| ActivateError::CreateBinDir {
                path: bin_dir.to_path_buf(),
                source: e,
            })?;
        }
        Err(e) => {
            return Err(ActivateError::RemoveExisting {
                path: link.clone(),
                source: e,
            });
        }
    }

    create_symlink(&target, &link).map_err(|e| ActivateError::CreateLink {
        link: link.clone(),
        target: target.clone(),
        source: e,
    })?;

    log::info!("linked {} -> {}", link.display(), target.display());
    Ok(link)
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

/// Runs `<link> --version` with stdout attached to ours
///
/// Informational only: failures are logged and otherwise ignored.
pub fn show_version(link: &Path) {
    match Command::new(link)
        .arg("--version")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
    {
        Ok(status) if status.success() => {}
        Ok(status) => log::warn!("{} --version exited with {}", link.display(), status),
        Err(e) => log::warn!("could not run {} --version: {}", link.display(), e),
    }
}

/// Version the tool's link currently points into, if any
///
/// Returns `None` when there is no link, when the path is not a symlink, or
/// when the link points outside `store_root`. The version directory may no
/// longer exist.
pub fn active_version(tool: Tool, store_root: &Path, bin_dir: &Path) -> Option<String> {
    let link = bin_dir.join(tool.canonical_name());
    let target = match fs::read_link(&link) {
        Ok(target) => target,
        Err(e) => {
            log::trace!("no active link at {}: {}", link.display(), e);
            return None;
        }
    };

    match target.strip_prefix(store_root).ok()?.components().next()? {
        Component::Normal(version) => version.to_str().map(str::to_string),
        _ => None,
    }
}

/// Where `PATH` resolves the tool relative to our link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStatus {
    /// The first match on `PATH` is the link
    Active,
    /// Another executable earlier on `PATH` wins
    Shadowed(PathBuf),
    /// The tool is not found on `PATH` at all
    NotOnPath,
}

/// Checks whether invoking the tool by name reaches `link`
pub fn path_status(tool: Tool, link: &Path) -> PathStatus {
    let found = match which::which(tool.canonical_name()) {
        Ok(found) => found,
        Err(_) => return PathStatus::NotOnPath,
    };

    if found == link || same_file(&found, link) {
        PathStatus::Active
    } else {
        PathStatus::Shadowed(found)
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;
    use hcswap_testkit::temp_dir_in_workspace;

    fn install_fake(store_root: &Path, version: &str) -> PathBuf {
        let dir = store_root.join(version);
        fs::create_dir_all(&dir).unwrap();
        let exe = dir.join("terraform");
        fs::write(&exe, format!("#!/bin/sh\necho 'Terraform v{version}'\n")).unwrap();
        exe
    }

    #[test]
    fn test_activate_creates_bin_dir_and_link() {
        let temp = temp_dir_in_workspace();
        let store = temp.path().join("terraform-versions");
        let bin = temp.path().join("bin");
        let exe = install_fake(&store, "1.6.0");

        let link = activate(Tool::Terraform, &store, "1.6.0", &bin).unwrap();

        assert_eq!(link, bin.join("terraform"));
        assert_eq!(fs::read_link(&link).unwrap(), exe);
    }

    #[test]
    fn test_activate_replaces_previous_version() {
        let temp = temp_dir_in_workspace();
        let store = temp.path().join("terraform-versions");
        let bin = temp.path().join("bin");
        install_fake(&store, "1.5.0");
        let exe_b = install_fake(&store, "1.6.0");

        activate(Tool::Terraform, &store, "1.5.0", &bin).unwrap();
        activate(Tool::Terraform, &store, "1.6.0", &bin).unwrap();

        let entries: Vec<_> = fs::read_dir(&bin).unwrap().collect();
        assert_eq!(entries.len(), 1, "exactly one link per tool");
        assert_eq!(fs::read_link(bin.join("terraform")).unwrap(), exe_b);
        assert_eq!(
            active_version(Tool::Terraform, &store, &bin).as_deref(),
            Some("1.6.0")
        );
    }

    #[test]
    fn test_activate_replaces_regular_file() {
        let temp = temp_dir_in_workspace();
        let store = temp.path().join("terraform-versions");
        let bin = temp.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::write(bin.join("terraform"), b"old manual install").unwrap();

        activate(Tool::Terraform, &store, "1.6.0", &bin).unwrap();

        let metadata = fs::symlink_metadata(bin.join("terraform")).unwrap();
        assert!(metadata.file_type().is_symlink());
    }

    #[test]
    fn test_activate_does_not_require_target() {
        let temp = temp_dir_in_workspace();
        let store = temp.path().join("terraform-versions");
        let bin = temp.path().join("bin");

        let link = activate(Tool::Terraform, &store, "9.9.9", &bin).unwrap();

        assert!(fs::symlink_metadata(&link).is_ok());
        assert!(!link.exists(), "link is dangling when the target is absent");
    }

    #[test]
    fn test_activate_fails_when_bin_dir_cannot_be_created() {
        let temp = temp_dir_in_workspace();
        let store = temp.path().join("terraform-versions");
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, b"file").unwrap();

        let result = activate(Tool::Terraform, &store, "1.6.0", &blocker.join("bin"));
        assert!(matches!(result, Err(ActivateError::CreateBinDir { .. })));
    }

    #[test]
    fn test_activate_reports_bin_dir_under_file_as_create_failure() {
        let temp = temp_dir_in_workspace();
        let store = temp.path().join("packer-versions");
        let blocker = temp.path().join("not-a-dir");
        fs::write(&blocker, b"file").unwrap();
        let bin = blocker.join("nested").join("bin");

        let err = activate(Tool::Packer, &store, "1.9.4", &bin).unwrap_err();

        assert!(err.to_string().contains("could not create link directory"));
        match err {
            ActivateError::CreateBinDir { path, .. } => assert_eq!(path, bin),
            other => panic!("expected CreateBinDir, got {other:?}"),
        }
    }

    #[test]
    fn test_active_version_without_link() {
        let temp = temp_dir_in_workspace();
        let store = temp.path().join("vault-versions");
        assert_eq!(active_version(Tool::Vault, &store, temp.path()), None);
    }

    #[test]
    fn test_active_version_ignores_foreign_links() {
        let temp = temp_dir_in_workspace();
        let store = temp.path().join("vault-versions");
        let bin = temp.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        std::os::unix::fs::symlink("/opt/elsewhere/vault", bin.join("vault")).unwrap();

        assert_eq!(active_version(Tool::Vault, &store, &bin), None);
    }

    #[test]
    fn test_show_version_tolerates_missing_executable() {
        let temp = temp_dir_in_workspace();
        show_version(&temp.path().join("does-not-exist"));
    }
}
