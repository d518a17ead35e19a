//! # Library Indexer
//!
//! Turns a folder tree of artwork into `library.json`, the manifest a gallery
//! viewer reads. The filesystem is the data source; the manifest only adds
//! titles, which are edited by hand and kept across re-runs.
//!
//! ```text
//! library/2023/Arc1/ArtistX/a.png   →   { "collections": [ { "name": "Untitled",
//!                                         "artist": "ArtistX", "year": 2023,
//!                                         "arc": 1, "images": [...] } ] }
//! ```
//!
//! # Pipeline
//!
//! Every run is a full rescan:
//!
//! ```text
//! 1. Titles   library.json  →  TitleIndex         (previous titles, best effort)
//! 2. Scan     library/      →  DiscoveredCollection list
//! 3. Merge    + TitleIndex  →  Collection list    (stored title or default)
//! 4. Sort     year desc, arc asc (stable)
//! 5. Write    Manifest      →  library.json
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Optional `library.toml`: paths, layout, extensions |
//! | [`types`] | The manifest as serialized to JSON |
//! | [`naming`] | Year, arc and image-file name rules |
//! | [`titles`] | Collection identity and previous-title loading |
//! | [`scan`] | Directory traversal |
//! | [`index`] | Merge, sort, build and write the manifest |
//! | [`output`] | CLI summary formatting |
//!
//! # Layouts
//!
//! Two hierarchy depths are supported, selected by [`config::Layout`]:
//!
//! - **artist**: `YYYY/ArcN/Artist/<images>`. One collection per artist per
//!   arc, titled with a placeholder until edited.
//! - **collection**: `YYYY/ArcN/Artist/Collection/<images>`. Each collection
//!   folder is its own collection, titled with the folder name until edited.
//!
//! # Failure Model
//!
//! Best effort, never strict. Oddly named folders and unknown file types are
//! skipped; a broken previous manifest just means no titles to keep. Only real
//! I/O failures (unreadable directories, unwritable output) are errors.

pub mod config;
pub mod index;
pub mod naming;
pub mod output;
pub mod scan;
pub mod titles;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
