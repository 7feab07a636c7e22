use std::fs;
use std::io;
use std::path::Path;

/// What a tool's version store currently holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreState {
    /// The store directory does not exist
    Missing,
    /// The store directory exists but holds no version
    Empty,
    /// Installed versions, in directory enumeration order (not sorted)
    Populated(Vec<String>),
}

impl StoreState {
    /// Installed versions; empty unless `Populated`
    pub fn versions(&self) -> &[String] {
        match self {
            StoreState::Populated(versions) => versions,
            StoreState::Missing | StoreState::Empty => &[],
        }
    }
}

/// Classifies the store directory at `store_root`
///
/// Only subdirectories count as versions. A missing directory is `Missing`;
/// every other I/O failure is returned as an error.
pub fn inspect(store_root: &Path) -> io::Result<StoreState> {
    let entries = match fs::read_dir(store_root) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(StoreState::Missing),
        Err(e) => return Err(e),
    };

    let mut versions = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => versions.push(name),
            Err(name) => log::warn!(
                "ignoring non UTF-8 entry {:?} in {}",
                name,
                store_root.display()
            ),
        }
    }

    if versions.is_empty() {
        Ok(StoreState::Empty)
    } else {
        Ok(StoreState::Populated(versions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hcswap_testkit::temp_dir_in_workspace;

    #[test]
    fn test_missing_store() {
        let temp = temp_dir_in_workspace();
        let state = inspect(&temp.path().join("terraform-versions")).unwrap();
        assert_eq!(state, StoreState::Missing);
        assert!(state.versions().is_empty());
    }

    #[test]
    fn test_empty_store() {
        let temp = temp_dir_in_workspace();
        assert_eq!(inspect(temp.path()).unwrap(), StoreState::Empty);
    }

    #[test]
    fn test_populated_store_lists_exactly_the_version_dirs() {
        let temp = temp_dir_in_workspace();
        fs::create_dir(temp.path().join("1.2.0")).unwrap();
        fs::create_dir(temp.path().join("1.3.0")).unwrap();

        let state = inspect(temp.path()).unwrap();
        let mut versions = state.versions().to_vec();
        versions.sort();
        assert_eq!(versions, vec!["1.2.0".to_string(), "1.3.0".to_string()]);
    }

    #[test]
    fn test_stray_files_are_not_versions() {
        let temp = temp_dir_in_workspace();
        fs::write(temp.path().join(".DS_Store"), b"").unwrap();
        assert_eq!(inspect(temp.path()).unwrap(), StoreState::Empty);

        fs::create_dir(temp.path().join("1.6.0")).unwrap();
        assert_eq!(
            inspect(temp.path()).unwrap(),
            StoreState::Populated(vec!["1.6.0".to_string()])
        );
    }

    #[test]
    fn test_store_path_that_is_a_file_is_an_error() {
        let temp = temp_dir_in_workspace();
        let file = temp.path().join("terraform-versions");
        fs::write(&file, b"not a directory").unwrap();

        let result = inspect(&file);
        assert!(result.is_err(), "a file must not be classified as Missing");
    }
}
