//! Instance-name slugification.
//!
//! Converts programmatic instance names to URL-safe slugs for routes
//! and element ids. Example: `Frankfurt am Main` → `frankfurt-am-main`.

use deunicode::deunicode;

// ============================================================================
// Slugification
// ============================================================================

/// Convert an instance name to a lowercase ASCII slug.
///
/// Unicode is transliterated to ASCII first, then every run of
/// non-alphanumeric characters collapses to a single `-`. Leading and
/// trailing separators are dropped.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_sep = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }

    slug
}
