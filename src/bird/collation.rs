use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compares scientific names in root-collation order: base letters first
/// (ignoring accents and case), then unaccented before accented, then
/// lowercase before uppercase.
pub fn compare_scientific_names(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| secondary_key(a).cmp(secondary_key(b)))
        // Reversed code-point order puts 'a' ahead of 'A'.
        .then_with(|| b.nfd().cmp(a.nfd()))
}

// Decomposed, mark-stripped, lowercased.
fn primary_key(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

// Decomposed and lowercased, marks kept.
fn secondary_key(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().flat_map(char::to_lowercase)
}
