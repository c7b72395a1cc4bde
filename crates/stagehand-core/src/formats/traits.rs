//! Common trait for archive format adapters.

use std::io::Read;

use crate::Result;
use crate::types::ArchiveEntry;

/// Visitor invoked once per archive entry.
///
/// The reader yields the entry's bytes and is only valid for the duration of
/// the call. Directory and link entries yield no bytes.
pub type EntryVisitor<'a> = dyn FnMut(&ArchiveEntry, &mut dyn Read) -> Result<()> + 'a;

/// A container that can be drained as a sequential stream of entries.
///
/// The stream is lazy and finite, and it cannot be restarted: scanning the
/// archive again requires opening it again.
pub trait ArchiveFormat {
    /// Feeds every entry, in archive order, to `visit`.
    ///
    /// Iteration stops at the first error, whether it comes from the
    /// container or from the visitor.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveUnreadable` if the container is malformed, or the
    /// visitor's error unchanged.
    fn for_each_entry(&mut self, visit: &mut EntryVisitor<'_>) -> Result<()>;

    /// Returns the format name.
    fn format_name(&self) -> &str;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct FixedFormat {
        entries: Vec<(&'static str, &'static [u8])>,
    }

    impl ArchiveFormat for FixedFormat {
        fn for_each_entry(&mut self, visit: &mut EntryVisitor<'_>) -> Result<()> {
            for (name, data) in &self.entries {
                visit(&ArchiveEntry::new(*name), &mut Cursor::new(*data))?;
            }
            Ok(())
        }

        fn format_name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_visitor_sees_entries_in_order() {
        let mut format = FixedFormat {
            entries: vec![("a/", &b""[..]), ("a/b.txt", &b"bee"[..]), ("c.txt", &b"sea"[..])],
        };
        let mut seen = Vec::new();
        format
            .for_each_entry(&mut |entry, reader| {
                let mut data = String::new();
                reader.read_to_string(&mut data).unwrap();
                seen.push((entry.name().to_string(), data));
                Ok(())
            })
            .unwrap();

        assert_eq!(
            seen,
            vec![
                ("a/".to_string(), String::new()),
                ("a/b.txt".to_string(), "bee".to_string()),
                ("c.txt".to_string(), "sea".to_string()),
            ]
        );
        assert_eq!(format.format_name(), "fixed");
    }
}
