//! Name rules for each level of the library tree.
//!
//! The library layout is encoded entirely in directory names:
//!
//! - `2023/` → year folder (exactly four ASCII digits)
//! - `Arc1/`, `arc12/` → arc folder (`Arc` + digits, any case)
//! - `a.png`, `b.JPEG` → image file (known extension, any case)
//!
//! Anything that doesn't match is skipped by the scanner, never an error.

/// Image extensions recognised when no config overrides them.
pub const DEFAULT_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "svg"];

/// Parse a year folder name. Only exactly four ASCII digits qualify.
///
/// - `"2023"` → Some(2023)
/// - `"0999"` → Some(999)
/// - `"23"`, `"20234"`, `"abc"` → None
pub fn parse_year(name: &str) -> Option<u32> {
    if name.len() == 4 && name.bytes().all(|b| b.is_ascii_digit()) {
        name.parse().ok()
    } else {
        None
    }
}

/// Parse an arc folder name, returning the arc number.
///
/// - `"Arc1"` → Some(1)
/// - `"ARC07"` → Some(7)
/// - `"Arc"`, `"Arc1b"`, `"Season1"` → None
pub fn parse_arc(name: &str) -> Option<u32> {
    let prefix = name.get(..3)?;
    if !prefix.eq_ignore_ascii_case("arc") {
        return None;
    }
    let digits = &name[3..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Whether a file name carries one of the given image extensions.
///
/// The comparison is case-insensitive. The extension is whatever follows the
/// last dot, so `".png"` counts as a png.
pub fn has_image_extension<S: AsRef<str>>(name: &str, extensions: &[S]) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => extensions
            .iter()
            .any(|known| known.as_ref().eq_ignore_ascii_case(ext)),
        None => false,
    }
}
