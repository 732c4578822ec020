#![allow(dead_code)]
//! Shared test helpers for integration tests.
//!
//! Include in each test file with:
//!   mod common;
//! then call `common::make_root(&["a", "b"])` to get a temp tree.

use std::fs;
use std::path::Path;

use devseed_lib::models::{Catalog, DocumentName};
use tempfile::TempDir;

/// Create a temp root with the given subdirectories already present.
pub fn make_root(existing: &[&str]) -> TempDir {
    let root = TempDir::new().unwrap();
    for dir in existing {
        fs::create_dir_all(root.path().join(dir)).unwrap();
    }
    root
}

/// The built-in catalog pointed at a custom directory list.
pub fn catalog_with_dirs(directories: &[&str]) -> Catalog {
    let mut catalog = Catalog::builtin();
    catalog.directories = directories.iter().map(|d| d.to_string()).collect();
    catalog
}

/// Parse every file name in `dir` as a generated document name.
pub fn document_names(dir: &Path) -> Vec<DocumentName> {
    devseed_lib::file_storage::list_documents(dir)
        .unwrap()
        .iter()
        .map(|name| DocumentName::parse(name).unwrap_or_else(|| panic!("bad name {}", name)))
        .collect()
}
