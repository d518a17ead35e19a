//! Shared test utilities: library tree builders and manifest lookups.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let lib = library_tree(tmp.path(), &["2023/Arc1/ArtistX/a.png"]);
//! ```

use std::path::{Path, PathBuf};

use crate::types::{Collection, Manifest};

// =========================================================================
// Fixture setup
// =========================================================================

/// Create an empty file at `rel` under `base`, creating parent directories.
pub fn touch(base: &Path, rel: &str) -> PathBuf {
    let path = base.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, "fake image").unwrap();
    path
}

/// Build `root/library/` with one empty file per relative path.
///
/// Returns the library directory.
pub fn library_tree(root: &Path, files: &[&str]) -> PathBuf {
    let library = root.join("library");
    std::fs::create_dir_all(&library).unwrap();
    for rel in files {
        touch(&library, rel);
    }
    library
}

// =========================================================================
// Manifest lookups — panics with a clear message on miss
// =========================================================================

/// Find a collection by artist, year and arc. Panics if not found.
pub fn find_collection<'a>(
    manifest: &'a Manifest,
    artist: &str,
    year: u32,
    arc: u32,
) -> &'a Collection {
    manifest
        .collections
        .iter()
        .find(|c| c.artist == artist && c.year == year && c.arc == arc)
        .unwrap_or_else(|| {
            let keys: Vec<String> = manifest
                .collections
                .iter()
                .map(|c| format!("{}/{}/Arc{}", c.artist, c.year, c.arc))
                .collect();
            panic!("collection {artist}/{year}/Arc{arc} not found. Available: {keys:?}")
        })
}

/// All collection titles in manifest order.
pub fn collection_names(manifest: &Manifest) -> Vec<&str> {
    manifest.collections.iter().map(|c| c.name.as_str()).collect()
}
