use crate::tool::Tool;
use std::fs;
use std::io;
use std::path::Path;

/// Deletes `<store_root>/<version>` and everything below it
///
/// Removing a version that is not there succeeds. The active link is left
/// alone even when it points into the removed directory.
pub fn uninstall(tool: Tool, store_root: &Path, version: &str) -> io::Result<()> {
    let version_dir = store_root.join(version);

    match fs::remove_dir_all(&version_dir) {
        Ok(()) => {
            log::info!("removed {} {} ({})", tool, version, version_dir.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("{} already absent", version_dir.display());
            Ok(())
        }
        Err(e) => Err(e),
    }
}
