use crate::bird::BirdEntry;

/// Counts shown next to the rendered list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSummary {
    pub count: usize,
    pub longest_common_name: String,
    pub longest_scientific_name: String,
}

impl ListSummary {
    pub fn from_entries(entries: &[BirdEntry]) -> Self {
        Self {
            count: entries.len(),
            longest_common_name: longest(entries.iter().map(|e| e.common_name.as_str())),
            longest_scientific_name: longest(entries.iter().map(|e| e.scientific_name.as_str())),
        }
    }
}

// First name with the most characters wins.
fn longest<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names
        .fold("", |longest, name| {
            if name.chars().count() > longest.chars().count() {
                name
            } else {
                longest
            }
        })
        .to_string()
}

/// Whether there is anything worth copying or writing.
pub fn has_usable_output(entries: &[BirdEntry], html: &str) -> bool {
    !entries.is_empty() && !html.is_empty()
}
