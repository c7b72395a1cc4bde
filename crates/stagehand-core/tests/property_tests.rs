//! Property-based tests for materialization.
//!
//! Archives are generated from random trees and materialized into temporary
//! directories; the output must mirror the selected entries exactly.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use stagehand_core::EntryName;
use stagehand_core::PrefixFilter;
use stagehand_core::materialize;
use stagehand_core::test_utils::ZipTestBuilder;
use stagehand_core::test_utils::write_archive;
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

/// Relative file names (one to three segments) mapped to their contents.
fn file_tree() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    prop::collection::btree_map(
        "(web|lib|meta)/([a-z]{1,6}/){0,2}[a-z]{1,8}\\.(txt|js|css)",
        prop::collection::vec(any::<u8>(), 0..256),
        1..12,
    )
}

fn build_jar(tree: &BTreeMap<String, Vec<u8>>) -> Vec<u8> {
    tree.iter()
        .fold(ZipTestBuilder::new(), |builder, (name, data)| {
            builder.add_deflated_file(name, data)
        })
        .build()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Every file lands at root/name with its exact bytes.
    #[test]
    fn prop_round_trip_fidelity(tree in file_tree()) {
        let temp = TempDir::new().expect("failed to create temp dir");
        let jar = write_archive(temp.path(), "app.jar", &build_jar(&tree));
        let out = temp.path().join("out");

        let report = materialize(&jar, "", &out).unwrap();

        prop_assert_eq!(report.files_written, tree.len());
        for (name, data) in &tree {
            prop_assert_eq!(&fs::read(out.join(name)).unwrap(), data);
        }
    }

    /// Nothing outside the filter is ever written.
    #[test]
    fn prop_filter_excludes_other_entries(
        tree in file_tree(),
        top in "(web|lib|meta)",
        leading_slash in any::<bool>(),
    ) {
        let temp = TempDir::new().expect("failed to create temp dir");
        let jar = write_archive(temp.path(), "app.jar", &build_jar(&tree));
        let out = temp.path().join("out");
        let prefix = if leading_slash { format!("/{top}") } else { top.clone() };

        materialize(&jar, &prefix, &out).unwrap();

        for name in tree.keys() {
            let selected = name.starts_with(&format!("{top}/"));
            prop_assert_eq!(out.join(name).is_file(), selected, "{}", name);
        }
        for other in ["web", "lib", "meta"].into_iter().filter(|t| *t != top) {
            prop_assert!(!out.join(other).exists());
        }
    }

    /// Normalized filters are empty or end with exactly one separator.
    #[test]
    fn prop_filter_normalization(raw in "[/\\\\]{0,3}([a-z]{1,5}[/\\\\]){0,3}[a-z]{0,5}") {
        let filter = PrefixFilter::new(&raw);
        let text = filter.as_str();

        prop_assert!(!text.starts_with('/'));
        prop_assert!(!text.contains('\\'));
        prop_assert!(filter.is_empty() || text.ends_with('/'));
        let again = PrefixFilter::new(text);
        prop_assert_eq!(again.as_str(), text);
    }

    /// Any name with a parent segment is rejected.
    #[test]
    fn prop_parent_traversal_rejected(
        prefix in "([a-z]+/){0,3}",
        suffix in "([a-z]+/?){0,3}",
    ) {
        let name = format!("{prefix}../{suffix}");
        prop_assert!(EntryName::parse(&name).is_err());
    }
}
