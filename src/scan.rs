//! Filesystem scanning.
//!
//! Walks the library tree level by level and collects every folder that holds
//! at least one image. Titles are not assigned here; see [`crate::index`].
//!
//! ## Directory Structure
//!
//! ```text
//! library/
//! ├── 2024/                        # Year (exactly four digits)
//! │   ├── Arc1/                    # Arc ("Arc" + digits, any case)
//! │   │   ├── ArtistX/             # Artist (any directory)
//! │   │   │   ├── a.png            # Image (artist layout)
//! │   │   │   └── notes.txt        # Ignored
//! │   │   └── ArtistY/
//! │   │       └── Sketches/        # Collection (collection layout only)
//! │   │           └── 01.jpg
//! │   └── misc/                    # Not an arc: skipped
//! └── drafts/                      # Not a year: skipped
//! ```
//!
//! ## Rules
//!
//! - Entries at every level are visited in sorted filename order, so the
//!   output is reproducible before the final sort.
//! - Non-matching names are skipped silently.
//! - A folder without images yields no collection.
//! - A missing library directory scans as empty.
//! - Names that aren't valid UTF-8 are skipped: they can't be written to the
//!   manifest as paths that point back at the file.

use crate::config::Layout;
use crate::naming::{self, has_image_extension};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot read directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// A folder of images found on disk, before a title is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredCollection {
    pub artist: String,
    /// Collection folder name. `None` in the artist layout.
    pub folder: Option<String>,
    pub year: u32,
    pub arc: u32,
    pub images: Vec<String>,
}

/// What to look for while scanning.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions<'a> {
    pub layout: Layout,
    pub extensions: &'a [String],
    /// Leading path segment for image paths, e.g. `library`. May be empty.
    pub asset_prefix: &'a str,
}

/// A named directory entry.
struct Entry {
    name: String,
    path: PathBuf,
}

pub fn scan(
    library: &Path,
    options: &ScanOptions<'_>,
) -> Result<Vec<DiscoveredCollection>, ScanError> {
    let mut found = Vec::new();
    if !library.is_dir() {
        return Ok(found);
    }

    for year_dir in subdirectories(library)? {
        let Some(year) = naming::parse_year(&year_dir.name) else {
            continue;
        };

        for arc_dir in subdirectories(&year_dir.path)? {
            let Some(arc) = naming::parse_arc(&arc_dir.name) else {
                continue;
            };

            for artist_dir in subdirectories(&arc_dir.path)? {
                let segments = [
                    year_dir.name.as_str(),
                    arc_dir.name.as_str(),
                    artist_dir.name.as_str(),
                ];

                match options.layout {
                    Layout::Artist => {
                        let images = collect_images(&artist_dir.path, &segments, options)?;
                        if !images.is_empty() {
                            found.push(DiscoveredCollection {
                                artist: artist_dir.name.clone(),
                                folder: None,
                                year,
                                arc,
                                images,
                            });
                        }
                    }
                    Layout::Collection => {
                        for collection_dir in subdirectories(&artist_dir.path)? {
                            let mut nested = segments.to_vec();
                            nested.push(collection_dir.name.as_str());
                            let images = collect_images(&collection_dir.path, &nested, options)?;
                            if !images.is_empty() {
                                found.push(DiscoveredCollection {
                                    artist: artist_dir.name.clone(),
                                    folder: Some(collection_dir.name.clone()),
                                    year,
                                    arc,
                                    images,
                                });
                            }
                        }
                    }
                }
            }
        }
    }

    Ok(found)
}

/// Immediate children of `dir` with UTF-8 names, sorted by filename.
fn sorted_entries(dir: &Path) -> Result<Vec<Entry>, ScanError> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        entries.push(Entry {
            name,
            path: entry.into_path(),
        });
    }
    Ok(entries)
}

fn subdirectories(dir: &Path) -> Result<Vec<Entry>, ScanError> {
    Ok(sorted_entries(dir)?
        .into_iter()
        .filter(|e| e.path.is_dir())
        .collect())
}

/// Image paths directly inside `dir`, in filename order.
fn collect_images(
    dir: &Path,
    segments: &[&str],
    options: &ScanOptions<'_>,
) -> Result<Vec<String>, ScanError> {
    Ok(sorted_entries(dir)?
        .into_iter()
        .filter(|e| e.path.is_file() && has_image_extension(&e.name, options.extensions))
        .map(|e| asset_path(options.asset_prefix, segments, &e.name))
        .collect())
}

/// Join path segments with `/` regardless of platform.
fn asset_path(prefix: &str, segments: &[&str], filename: &str) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(segments.len() + 2);
    if !prefix.is_empty() {
        parts.push(prefix);
    }
    parts.extend_from_slice(segments);
    parts.push(filename);
    parts.join("/")
}
