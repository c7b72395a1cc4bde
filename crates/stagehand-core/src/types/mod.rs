//! Archive path and entry types.
//!
//! Archive-internal paths are always forward-slash delimited and never
//! depend on the host separator. Normalization happens once, at
//! construction, so the rest of the crate compares plain strings.

pub mod entry_name;
pub mod entry_type;
pub mod prefix;

pub use entry_name::EntryName;
pub use entry_name::EntryNameError;
pub use entry_type::ArchiveEntry;
pub use entry_type::EntryKind;
pub use prefix::PrefixFilter;
pub use prefix::ResourcePrefix;
