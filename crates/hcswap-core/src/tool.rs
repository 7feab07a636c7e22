//! Supported tools and version identifiers

use crate::error::{Result, SwapError};
use serde::Serialize;
use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;

/// A tool whose releases are published on the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Terraform,
    Packer,
    Vault,
}

impl Tool {
    /// All supported tools, in menu order
    pub const ALL: [Tool; 3] = [Tool::Terraform, Tool::Packer, Tool::Vault];

    /// Name shown in prompts (e.g. "Terraform")
    pub fn display_name(self) -> &'static str {
        match self {
            Tool::Terraform => "Terraform",
            Tool::Packer => "Packer",
            Tool::Vault => "Vault",
        }
    }

    /// Lowercase name used in paths, URLs and the active link
    pub fn canonical_name(self) -> &'static str {
        match self {
            Tool::Terraform => "terraform",
            Tool::Packer => "packer",
            Tool::Vault => "vault",
        }
    }

    /// File name of the executable shipped inside a release archive
    pub fn executable_name(self) -> String {
        #[cfg(target_os = "windows")]
        return format!("{}.exe", self.canonical_name());

        #[cfg(not(target_os = "windows"))]
        return self.canonical_name().to_string();
    }

    /// Looks a tool up by its display name as returned from a prompt
    pub fn from_display_name(name: &str) -> Option<Tool> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.display_name() == name)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Tool {
    type Err = SwapError;

    /// Case-insensitive match on the tool name
    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        Tool::ALL
            .into_iter()
            .find(|tool| tool.canonical_name() == lowered)
            .ok_or_else(|| SwapError::UnknownTool(s.to_string()))
    }
}

/// Validates that a version identifier can be used as a single path segment
///
/// Versions are opaque: nothing about their structure is checked beyond the
/// fact that joining them onto the store root must yield a direct child.
pub fn validate_version(version: &str) -> Result<()> {
    let invalid = |reason: &str| SwapError::InvalidVersion {
        version: version.to_string(),
        reason: reason.to_string(),
    };

    if version.is_empty() {
        return Err(invalid("empty"));
    }

    if version.contains('/') || version.contains('\\') {
        return Err(invalid("contains a path separator"));
    }

    let mut components = Path::new(version).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid("not a plain path segment")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("Terraform".parse::<Tool>().unwrap(), Tool::Terraform);
        assert_eq!("PACKER".parse::<Tool>().unwrap(), Tool::Packer);
        assert_eq!(" vault ".parse::<Tool>().unwrap(), Tool::Vault);
    }

    #[test]
    fn test_from_str_rejects_unknown_tool() {
        let err = "consul".parse::<Tool>().unwrap_err();
        assert!(matches!(err, SwapError::UnknownTool(ref name) if name == "consul"));
        assert!(err.to_string().starts_with("TOOL_UNKNOWN"));
    }

    #[test]
    fn test_display_and_canonical_names() {
        for tool in Tool::ALL {
            assert_eq!(
                tool.display_name().to_ascii_lowercase(),
                tool.canonical_name()
            );
            assert_eq!(Tool::from_display_name(tool.display_name()), Some(tool));
        }
        assert_eq!(Tool::from_display_name("terraform"), None);
    }

    #[test]
    #[cfg(not(target_os = "windows"))]
    fn test_executable_name_unix() {
        assert_eq!(Tool::Vault.executable_name(), "vault");
    }

    #[test]
    fn test_validate_version_accepts_plain_tokens() {
        for version in ["1.6.0", "1.7.0-beta1", "0.12.31+ent", "v2"] {
            assert!(validate_version(version).is_ok(), "{version} should be valid");
        }
    }

    #[test]
    fn test_validate_version_rejects_path_like_tokens() {
        for version in ["", ".", "..", "../1.0.0", "1.0/evil", "/abs", "a\\b"] {
            let err = validate_version(version).unwrap_err();
            assert!(
                matches!(err, SwapError::InvalidVersion { .. }),
                "{version:?} should be rejected, got {err:?}"
            );
        }
    }
}
