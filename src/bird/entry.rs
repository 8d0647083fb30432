use serde::{Deserialize, Serialize};

/// One parsed item of the input list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirdEntry {
    pub common_name: String,
    pub scientific_name: String,
    pub original: String, // Trimmed source fragment, used when rendering unparsed entries
}

impl BirdEntry {
    /// Entry for a fragment that carried a parenthesized scientific name.
    pub fn named(common_name: &str, scientific_name: &str, original: &str) -> Self {
        Self {
            common_name: common_name.to_string(),
            scientific_name: scientific_name.to_string(),
            original: original.to_string(),
        }
    }

    /// Entry for a fragment kept verbatim.
    pub fn unparsed(original: &str) -> Self {
        Self {
            common_name: original.to_string(),
            scientific_name: String::new(),
            original: original.to_string(),
        }
    }

    pub fn has_scientific_name(&self) -> bool {
        !self.scientific_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsed_entry_mirrors_original() {
        let entry = BirdEntry::unparsed("Some Bird");
        assert_eq!(entry.common_name, "Some Bird");
        assert_eq!(entry.scientific_name, "");
        assert_eq!(entry.original, "Some Bird");
        assert!(!entry.has_scientific_name());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let entry = BirdEntry::named(
            "Blue Jay",
            "Cyanocitta cristata",
            "Blue Jay (Cyanocitta cristata)",
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["commonName"], "Blue Jay");
        assert_eq!(json["scientificName"], "Cyanocitta cristata");
        assert_eq!(json["original"], "Blue Jay (Cyanocitta cristata)");
    }
}
