//! Analyte name keys.
//!
//! Report names arrive in several languages and spellings ("Créatinine",
//! "CREATININE (serum)", "креатинин"). Matching is done on a folded key.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Characters that act as word separators inside analyte names.
const SEPARATORS: [char; 12] = ['%', '(', ')', '[', ']', '{', '}', ':', ';', ',', '/', '\\'];

/// Variant markers that may trail a leukocyte differential name.
const VARIANT_SUFFIXES: [&str; 3] = ["%", "percent", "absolute"];

/// Normalizes an analyte name into its matching key.
///
/// Strips diacritics (NFKD, combining marks dropped), lower-cases, turns
/// [`SEPARATORS`] into spaces and collapses whitespace. Idempotent.
pub fn normalize_name(raw: &str) -> String {
    // Lower-case on both sides of the decomposition: some compatibility
    // characters decompose to capitals and some capitals lower-case to a
    // letter plus a combining mark.
    let folded: String = raw
        .to_lowercase()
        .nfkd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect::<String>()
        .to_lowercase();
    folded
        .replace(SEPARATORS, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Returns the analyte word a key is about, ignoring a trailing variant marker.
///
/// `"segmented neutrophils absolute"` → `"neutrophils"`.
pub fn base_analyte(key: &str) -> &str {
    let mut base = key.trim_end();
    for suffix in VARIANT_SUFFIXES {
        if let Some(rest) = base.strip_suffix(suffix) {
            base = rest.trim_end();
            break;
        }
    }
    base.rsplit(char::is_whitespace).next().unwrap_or_default()
}
