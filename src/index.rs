//! Manifest assembly: titles + scan → sorted manifest → `library.json`.
//!
//! ```text
//! load_titles(library.json) ─┐
//!                            ├─ merge_titles ─ sort_collections ─ write_manifest
//! scan(library/) ────────────┘
//! ```
//!
//! The previous manifest is read before anything is written, so a run always
//! sees the titles of the run before it.

use crate::config::{IndexerConfig, Layout};
use crate::scan::{self, DiscoveredCollection, ScanError, ScanOptions};
use crate::titles::{self, CollectionKey, TitleIndex};
use crate::types::{Collection, Manifest};
use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Filesystem locations derived from the project root and config.
#[derive(Debug, Clone, PartialEq)]
pub struct Paths {
    /// Directory scanned for images.
    pub library: PathBuf,
    /// Manifest file, read for titles and then overwritten.
    pub output: PathBuf,
    /// Leading segment of every image path in the manifest.
    pub asset_prefix: String,
}

impl Paths {
    pub fn resolve(root: &Path, config: &IndexerConfig) -> Self {
        Self {
            library: root.join(&config.library),
            output: root.join(&config.output),
            asset_prefix: asset_prefix(&config.library),
        }
    }
}

/// Normalize the configured library path into a web-style path prefix.
///
/// - `library` → `library`
/// - `./art/library/` → `art/library`
/// - `art\library` → `art/library`
/// - `.` → empty
fn asset_prefix(library: &str) -> String {
    let normalized = library.replace('\\', "/");
    normalized
        .split('/')
        .filter(|seg| !seg.is_empty() && *seg != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Attach titles to scanned collections.
///
/// A previous title wins. Otherwise the collection folder name is used, or the
/// configured placeholder when the artist folder holds the images directly.
pub fn merge_titles(
    found: Vec<DiscoveredCollection>,
    titles: &TitleIndex,
    config: &IndexerConfig,
) -> Vec<Collection> {
    found
        .into_iter()
        .map(|c| {
            let key = CollectionKey::for_discovered(&c);
            let name = match titles.get(&key) {
                Some(title) => title.to_string(),
                None => default_title(config.layout, c.folder.as_deref(), config).to_string(),
            };
            Collection {
                name,
                artist: c.artist,
                year: c.year,
                arc: c.arc,
                images: c.images,
            }
        })
        .collect()
}

fn default_title<'a>(
    layout: Layout,
    folder: Option<&'a str>,
    config: &'a IndexerConfig,
) -> &'a str {
    match (layout, folder) {
        (Layout::Collection, Some(folder)) => folder,
        _ => &config.untitled,
    }
}

/// Newest year first, then arcs in ascending order.
///
/// The sort is stable: collections sharing a year and arc keep scan order.
pub fn sort_collections(collections: &mut [Collection]) {
    collections.sort_by_key(|c| (Reverse(c.year), c.arc));
}

/// Run the read → scan → merge → sort pipeline without writing anything.
pub fn build_manifest(paths: &Paths, config: &IndexerConfig) -> Result<Manifest, IndexError> {
    let titles = titles::load_titles(&paths.output, config.layout);
    let options = ScanOptions {
        layout: config.layout,
        extensions: &config.extensions,
        asset_prefix: &paths.asset_prefix,
    };
    let found = scan::scan(&paths.library, &options)?;

    let mut collections = merge_titles(found, &titles, config);
    sort_collections(&mut collections);
    Ok(Manifest { collections })
}

/// Build the manifest and write it to `paths.output`.
pub fn run(paths: &Paths, config: &IndexerConfig) -> Result<Manifest, IndexError> {
    let manifest = build_manifest(paths, config)?;
    write_manifest(&paths.output, &manifest)?;
    Ok(manifest)
}

/// Write the manifest as 2-space indented JSON, replacing any existing file.
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<(), IndexError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(path, json)?;
    Ok(())
}
