//! Genre taxonomy mapping
//!
//! Maps locale-specific genre strings onto the canonical English vocabulary
//! in [`genre_table`](super::genre_table). Unknown genres pass through
//! unchanged so the mapper never fails.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::genre_table::GENRE_TABLE;

static GENRE_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| GENRE_TABLE.iter().copied().collect());

/// Map a raw genre string to its canonical English form.
///
/// Lookup order: exact match, then for `Category/Subcategory` compounds the
/// full compound, the part after the slash (more specific), the part before
/// it, and finally a case-insensitive scan of the whole table. If nothing
/// matches, the trimmed input comes back as-is.
pub fn map_genre(raw: &str) -> String {
    let genre = raw.trim();
    if genre.is_empty() {
        return String::new();
    }

    if let Some(mapped) = GENRE_INDEX.get(genre) {
        return (*mapped).to_string();
    }

    if let Some((first, second)) = genre.split_once('/') {
        let second = second.trim();
        if let Some(mapped) = GENRE_INDEX.get(second) {
            return (*mapped).to_string();
        }
        let first = first.trim();
        if let Some(mapped) = GENRE_INDEX.get(first) {
            return (*mapped).to_string();
        }
    }

    let lowered = genre.to_lowercase();
    for (key, mapped) in GENRE_TABLE {
        if key.to_lowercase() == lowered {
            return (*mapped).to_string();
        }
    }

    genre.to_string()
}
