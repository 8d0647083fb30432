//! Turns a raw comma-separated bird list into entries sorted by scientific name.
use crate::bird::collation::compare_scientific_names;
use crate::bird::entry::BirdEntry;
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

// Common-name prefix and the first opening parenthesis.
static GROUP_START_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<common>[^(]*)\(").expect("valid group start regex"));

/// Parses and sorts the list. Never fails: blank input gives an empty vector and
/// fragments without a usable parenthesized group are kept verbatim.
pub fn parse(input: &str) -> Vec<BirdEntry> {
    if input.trim().is_empty() {
        return Vec::new();
    }

    let mut entries: Vec<BirdEntry> = split_fragments(input).map(parse_fragment).collect();
    debug!("Parsed {} bird entries", entries.len());

    sort_entries(&mut entries);
    entries
}

/// Comma-separated, trimmed, non-empty fragments in input order.
pub fn split_fragments(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(',')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
}

/// Extracts common and scientific names from one trimmed fragment.
///
/// The scientific name is the content of the first parenthesized group, up to the
/// parenthesis that closes it (nested groups stay inside). Text after that group
/// only survives in `original`.
pub fn parse_fragment(fragment: &str) -> BirdEntry {
    let Some(caps) = GROUP_START_REGEX.captures(fragment) else {
        trace!("No parenthesized group in '{}'", fragment);
        return BirdEntry::unparsed(fragment);
    };

    let group_start = caps.get(0).map_or(0, |m| m.end());
    let common = caps.name("common").map_or("", |m| m.as_str());

    match group_content(&fragment[group_start..]) {
        Some(content) if !content.trim().is_empty() => {
            BirdEntry::named(common.trim(), content.trim(), fragment)
        }
        _ => {
            trace!("Unbalanced or empty parenthesized group in '{}'", fragment);
            BirdEntry::unparsed(fragment)
        }
    }
}

// `rest` starts right after an opening parenthesis.
fn group_content(rest: &str) -> Option<&str> {
    let mut depth = 1usize;
    for (index, ch) in rest.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&rest[..index]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Stable sort: entries with a scientific name first, collated by that name.
/// Ties, including every entry without a scientific name, keep input order.
pub fn sort_entries(entries: &mut [BirdEntry]) {
    entries.sort_by(|a, b| {
        b.has_scientific_name()
            .cmp(&a.has_scientific_name())
            .then_with(|| compare_scientific_names(&a.scientific_name, &b.scientific_name))
    });
}
