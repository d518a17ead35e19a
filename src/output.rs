//! CLI output formatting.
//!
//! One summary for both `build` and `check`:
//!
//! ```text
//! Generated library.json with 2 collection(s):
//!   - "My Art" by ArtistX (2024, Arc 1) - 3 images
//!   - "Untitled" by ArtistY (2023, Arc 2) - 1 images
//! ```
//!
//! Format functions are pure and return `Vec<String>`; `print_*` wrappers
//! write to stdout.

use crate::types::{Collection, Manifest};

/// One summary line for a collection.
fn collection_line(collection: &Collection) -> String {
    format!(
        "  - \"{}\" by {} ({}, Arc {}) - {} images",
        collection.name,
        collection.artist,
        collection.year,
        collection.arc,
        collection.images.len()
    )
}

/// Summary after writing the manifest to `file_name`.
pub fn format_build_output(manifest: &Manifest, file_name: &str) -> Vec<String> {
    let mut lines = vec![format!(
        "Generated {} with {} collection(s):",
        file_name,
        manifest.collections.len()
    )];
    lines.extend(manifest.collections.iter().map(collection_line));
    lines
}

/// Summary for a dry run: same listing, nothing written.
pub fn format_check_output(manifest: &Manifest, file_name: &str) -> Vec<String> {
    let mut lines = vec![format!(
        "Found {} collection(s) (not written to {}):",
        manifest.collections.len(),
        file_name
    )];
    lines.extend(manifest.collections.iter().map(collection_line));
    lines
}

pub fn print_build_output(manifest: &Manifest, file_name: &str) {
    for line in format_build_output(manifest, file_name) {
        println!("{}", line);
    }
}

pub fn print_check_output(manifest: &Manifest, file_name: &str) {
    for line in format_check_output(manifest, file_name) {
        println!("{}", line);
    }
}
