//! Manifest types written to (and read back from) `library.json`.
//!
//! The field names and order here are the on-disk contract consumed by the
//! viewer, so they must not change shape.

use serde::{Deserialize, Serialize};

/// Top-level manifest: every collection found in the library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub collections: Vec<Collection>,
}

/// A titled set of images by one artist within one year and arc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Display title. Hand-edited values survive re-runs.
    pub name: String,
    pub artist: String,
    pub year: u32,
    pub arc: u32,
    /// Forward-slash paths relative to the project root, in filename order.
    pub images: Vec<String>,
}
