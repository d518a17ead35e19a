//! Title preservation across runs.
//!
//! Titles live only in the generated manifest: users edit `name` by hand and
//! the next run must give it back to the same collection. Each collection is
//! identified by a [`CollectionKey`]; the previous manifest is read into a
//! [`TitleIndex`] before the scan and consulted afterwards.
//!
//! ## Identity
//!
//! | Layout | Key |
//! |--------|-----|
//! | artist | `(artist, year, arc)` |
//! | collection | `(artist, collection folder, year, arc)` |
//!
//! The manifest doesn't store the collection folder name, so for stored
//! entries it is recovered from the image paths: the parent directory of the
//! first image. That keeps the key stable even after the title was edited.
//!
//! ## Failure
//!
//! Loading never fails. A missing, unreadable or malformed manifest simply
//! means there are no titles to preserve. Entries are read one by one: an
//! entry without `name`, `artist`, `year` or `arc` is skipped and the others
//! keep their titles. `images` may be absent.

use crate::config::Layout;
use crate::scan::DiscoveredCollection;
use crate::types::{Collection, Manifest};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Identity of a collection for title lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionKey {
    pub artist: String,
    /// Collection folder name. Always `None` in the artist layout.
    pub collection: Option<String>,
    pub year: u32,
    pub arc: u32,
}

impl CollectionKey {
    pub fn for_discovered(found: &DiscoveredCollection) -> Self {
        Self {
            artist: found.artist.clone(),
            collection: found.folder.clone(),
            year: found.year,
            arc: found.arc,
        }
    }

    pub fn for_stored(stored: &Collection, layout: Layout) -> Self {
        let collection = match layout {
            Layout::Artist => None,
            Layout::Collection => Some(
                stored
                    .images
                    .first()
                    .and_then(|path| parent_folder(path))
                    .unwrap_or(stored.name.as_str())
                    .to_string(),
            ),
        };
        Self {
            artist: stored.artist.clone(),
            collection,
            year: stored.year,
            arc: stored.arc,
        }
    }
}

/// Name of the directory holding a `/`-separated asset path.
fn parent_folder(path: &str) -> Option<&str> {
    path.rsplit('/').nth(1).filter(|s| !s.is_empty())
}

/// Previously assigned titles, keyed by collection identity.
#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    titles: HashMap<CollectionKey, String>,
}

impl TitleIndex {
    /// Index the titles of an existing manifest. Later duplicates win.
    pub fn from_manifest(manifest: &Manifest, layout: Layout) -> Self {
        let titles = manifest
            .collections
            .iter()
            .map(|c| (CollectionKey::for_stored(c, layout), c.name.clone()))
            .collect();
        Self { titles }
    }

    pub fn get(&self, key: &CollectionKey) -> Option<&str> {
        self.titles.get(key).map(String::as_str)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// The previous manifest, with entries left unparsed so one bad entry can't
/// spoil the rest.
#[derive(Deserialize)]
struct StoredManifest {
    collections: Vec<serde_json::Value>,
}

/// The fields of a stored entry that title lookup needs.
#[derive(Deserialize)]
struct StoredEntry {
    name: String,
    artist: String,
    year: u32,
    arc: u32,
    #[serde(default)]
    images: Vec<String>,
}

impl From<StoredEntry> for Collection {
    fn from(entry: StoredEntry) -> Self {
        Self {
            name: entry.name,
            artist: entry.artist,
            year: entry.year,
            arc: entry.arc,
            images: entry.images,
        }
    }
}

/// Parse a manifest leniently, dropping entries that don't have the fields
/// title lookup needs.
fn parse_stored(content: &str) -> Option<Manifest> {
    let stored: StoredManifest = serde_json::from_str(content).ok()?;
    let collections = stored
        .collections
        .into_iter()
        .filter_map(|value| serde_json::from_value::<StoredEntry>(value).ok())
        .map(Collection::from)
        .collect();
    Some(Manifest { collections })
}

/// Read titles from the manifest at `path`, or nothing if it can't be used.
pub fn load_titles(path: &Path, layout: Layout) -> TitleIndex {
    fs::read_to_string(path)
        .ok()
        .and_then(|content| parse_stored(&content))
        .map(|manifest| TitleIndex::from_manifest(&manifest, layout))
        .unwrap_or_default()
}
