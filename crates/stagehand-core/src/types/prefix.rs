//! Prefix filters selecting archive entries.
//!
//! Archive entry names never begin with a separator and always use `/`.
//! Callers, on the other hand, tend to pass resource paths the way they
//! would on the host (`/assets`, `\assets\`, `assets`). Both filter types
//! normalize that input once so matching is a plain string prefix test.

/// Rewrites `\` to `/` and strips leading separators.
fn to_archive_style(raw: &str) -> String {
    raw.replace('\\', "/").trim_start_matches('/').to_string()
}

/// Directory-boundary filter used by [`materialize`](crate::materialize).
///
/// A non-empty filter always ends with `/`, so `assets` selects
/// `assets/index.html` but not `assets-old/index.html`. The empty filter
/// selects every entry.
///
/// # Examples
///
/// ```
/// use stagehand_core::PrefixFilter;
///
/// assert_eq!(PrefixFilter::new("/config").as_str(), "config/");
/// assert_eq!(PrefixFilter::new("config/").as_str(), "config/");
/// assert_eq!(PrefixFilter::new("/").as_str(), "");
/// assert!(PrefixFilter::new("").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PrefixFilter(String);

impl PrefixFilter {
    /// Normalizes a raw filter.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let mut prefix = to_archive_style(raw);
        if !prefix.is_empty() && !prefix.ends_with('/') {
            prefix.push('/');
        }
        Self(prefix)
    }

    /// Filter that selects everything.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Normalized filter text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the select-everything filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if `name` lies under this filter.
    #[inline]
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        name.starts_with(&self.0)
    }
}

impl From<&str> for PrefixFilter {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl std::fmt::Display for PrefixFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resource prefix used by [`extract_file`](crate::extract_file).
///
/// Unlike [`PrefixFilter`] no trailing separator is added: the prefix names
/// a resource, not a directory boundary.
///
/// # Examples
///
/// ```
/// use stagehand_core::ResourcePrefix;
///
/// let prefix = ResourcePrefix::new("/config/help.txt");
/// assert_eq!(prefix.as_str(), "config/help.txt");
/// assert!(prefix.matches("config/help.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ResourcePrefix(String);

impl ResourcePrefix {
    /// Normalizes a raw resource path.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(to_archive_style(raw))
    }

    /// Normalized prefix text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if `name` starts with this prefix.
    #[inline]
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        name.starts_with(&self.0)
    }
}

impl From<&str> for ResourcePrefix {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl std::fmt::Display for ResourcePrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_filter_normalization() {
        let cases = [
            ("", ""),
            ("/", ""),
            ("//", ""),
            ("config", "config/"),
            ("/config", "config/"),
            ("/config/", "config/"),
            ("config/", "config/"),
            ("web/static", "web/static/"),
            ("\\web\\static", "web/static/"),
        ];
        for (raw, expected) in cases {
            assert_eq!(PrefixFilter::new(raw).as_str(), expected, "input {raw:?}");
        }
    }

    #[test]
    fn test_prefix_filter_directory_boundary() {
        let filter = PrefixFilter::new("assets");
        assert!(filter.matches("assets/"));
        assert!(filter.matches("assets/index.html"));
        assert!(!filter.matches("assets-old/index.html"));
        assert!(!filter.matches("assets"));
        assert!(!filter.matches("other/assets/x"));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = PrefixFilter::all();
        assert!(filter.is_empty());
        assert!(filter.matches("anything"));
        assert!(filter.matches(""));
    }

    #[test]
    fn test_resource_prefix() {
        let prefix = ResourcePrefix::new("/config/help");
        assert_eq!(prefix.as_str(), "config/help");
        assert!(prefix.matches("config/help.txt"));
        assert!(prefix.matches("config/help/"));
        assert!(!prefix.matches("config/other.txt"));
    }

    #[test]
    fn test_display_round_trips_normalized_text() {
        assert_eq!(PrefixFilter::from("/a").to_string(), "a/");
        assert_eq!(ResourcePrefix::from("/a").to_string(), "a");
    }
}
