//! Validated archive-internal entry names.

use std::path::Component;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Why an entry name was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryNameError {
    /// The name is empty.
    #[error("empty entry name")]
    Empty,

    /// The name contains a NUL byte.
    #[error("entry name contains a null byte: {0:?}")]
    NulByte(String),

    /// The name is absolute or carries a drive prefix.
    #[error("absolute entry name: {0}")]
    Absolute(String),

    /// The name has a `..` component.
    #[error("entry name escapes the destination root: {0}")]
    ParentTraversal(String),
}

/// An archive entry name that is safe to join onto a destination root.
///
/// Names are forward-slash delimited regardless of the host platform. A
/// valid name is non-empty, relative, and has no `..` component, so
/// `root.join(name.to_relative_path())` always stays under `root`.
///
/// # Examples
///
/// ```
/// use stagehand_core::types::EntryName;
/// use std::path::Path;
///
/// let name = EntryName::parse("assets/css/site.css").unwrap();
/// assert_eq!(name.to_relative_path(), Path::new("assets").join("css").join("site.css"));
///
/// assert!(EntryName::parse("../etc/passwd").is_err());
/// assert!(EntryName::parse("/etc/passwd").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryName(String);

impl EntryName {
    /// Validates a raw entry name.
    pub fn parse(raw: &str) -> Result<Self, EntryNameError> {
        if raw.is_empty() {
            return Err(EntryNameError::Empty);
        }
        if raw.contains('\0') {
            return Err(EntryNameError::NulByte(raw.to_string()));
        }
        if raw.starts_with('/') || raw.starts_with('\\') {
            return Err(EntryNameError::Absolute(raw.to_string()));
        }
        // Check both separators so a name cannot escape on either host family.
        if raw.split(['/', '\\']).any(|segment| segment == "..") {
            return Err(EntryNameError::ParentTraversal(raw.to_string()));
        }
        for component in Path::new(raw).components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {
                    return Err(EntryNameError::Absolute(raw.to_string()));
                }
                Component::ParentDir => {
                    return Err(EntryNameError::ParentTraversal(raw.to_string()));
                }
                Component::CurDir | Component::Normal(_) => {}
            }
        }
        Ok(Self(raw.to_string()))
    }

    /// The name as stored in the archive.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the name denotes a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.0.ends_with('/')
    }

    /// Converts the name into a host relative path.
    ///
    /// Empty and `.` segments are dropped. A name made only of such segments
    /// (for example `./`) maps to an empty path, i.e. the root itself.
    #[must_use]
    pub fn to_relative_path(&self) -> PathBuf {
        self.0
            .split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .collect()
    }
}

impl std::fmt::Display for EntryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for raw in ["index.html", "assets/", "assets/index.html", "a/b/c/d.txt", "./a.txt"] {
            assert!(EntryName::parse(raw).is_ok(), "should accept {raw}");
        }
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(EntryName::parse(""), Err(EntryNameError::Empty));
    }

    #[test]
    fn test_absolute_rejected() {
        assert!(matches!(
            EntryName::parse("/etc/passwd"),
            Err(EntryNameError::Absolute(_))
        ));
        assert!(matches!(
            EntryName::parse("\\windows\\system32"),
            Err(EntryNameError::Absolute(_))
        ));
    }

    #[test]
    fn test_parent_traversal_rejected() {
        for raw in ["../x", "a/../../x", "a/..", "a\\..\\x"] {
            assert!(
                matches!(EntryName::parse(raw), Err(EntryNameError::ParentTraversal(_))),
                "should reject {raw}"
            );
        }
    }

    #[test]
    fn test_dotdot_inside_segment_is_fine() {
        assert!(EntryName::parse("a/..b/c").is_ok());
        assert!(EntryName::parse("a/b../c").is_ok());
    }

    #[test]
    fn test_nul_rejected() {
        assert!(matches!(
            EntryName::parse("a\0b"),
            Err(EntryNameError::NulByte(_))
        ));
    }

    #[test]
    fn test_relative_path() {
        let name = EntryName::parse("assets/css/").unwrap();
        assert!(name.is_dir());
        assert_eq!(name.to_relative_path(), PathBuf::from("assets").join("css"));

        let name = EntryName::parse("./a//b.txt").unwrap();
        assert_eq!(name.to_relative_path(), PathBuf::from("a").join("b.txt"));
    }
}
