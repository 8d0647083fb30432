//! Minimal HTML output, shaped for pasting into a word processor.
use crate::bird::BirdEntry;

const DOCUMENT_HEAD: &str =
    "<!DOCTYPE html><html><head><meta charset=\"utf-8\"></head><body>\n<p>";
const DOCUMENT_TAIL: &str = "</p>\n</body></html>";
const SEPARATOR: &str = ", ";

/// Renders entries, in the order given, as one paragraph of a complete HTML document.
/// Scientific names are wrapped in `<em>`; unparsed entries are emitted verbatim.
pub fn render(entries: &[BirdEntry]) -> String {
    let items = entries
        .iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    let mut html =
        String::with_capacity(DOCUMENT_HEAD.len() + items.len() + DOCUMENT_TAIL.len());
    html.push_str(DOCUMENT_HEAD);
    html.push_str(&items);
    html.push_str(DOCUMENT_TAIL);
    html
}

/// Inline HTML for a single entry.
pub fn render_entry(entry: &BirdEntry) -> String {
    if entry.has_scientific_name() {
        format!("{} (<em>{}</em>)", entry.common_name, entry.scientific_name)
    } else {
        entry.original.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bird::parse;

    #[test]
    fn empty_list_renders_empty_paragraph() {
        assert_eq!(
            render(&[]),
            concat!(
                "<!DOCTYPE html><html><head><meta charset=\"utf-8\"></head><body>\n",
                "<p></p>\n</body></html>"
            )
        );
    }

    #[test]
    fn renders_sorted_list() {
        let html = render(&parse(
            "American Robin (Turdus migratorius), Blue Jay (Cyanocitta cristata), Mystery bird",
        ));
        assert!(html.contains(concat!(
            "<p>Blue Jay (<em>Cyanocitta cristata</em>), ",
            "American Robin (<em>Turdus migratorius</em>), Mystery bird</p>"
        )));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</body></html>"));
    }

    #[test]
    fn named_entry_wraps_scientific_name() {
        let entry = BirdEntry::named(
            "Blue Jay",
            "Cyanocitta cristata",
            "Blue Jay (Cyanocitta cristata)",
        );
        assert_eq!(render_entry(&entry), "Blue Jay (<em>Cyanocitta cristata</em>)");
    }

    #[test]
    fn unparsed_entry_is_verbatim() {
        for original in ["Kestrel (Falco", "Odd <b>bird</b>", "Plain"] {
            assert_eq!(render_entry(&BirdEntry::unparsed(original)), original);
        }
    }

    #[test]
    fn does_not_resort() {
        let entries = vec![
            BirdEntry::named("Robin", "Turdus", "Robin (Turdus)"),
            BirdEntry::named("Jay", "Cyanocitta", "Jay (Cyanocitta)"),
        ];
        let expected = "<p>Robin (<em>Turdus</em>), Jay (<em>Cyanocitta</em>)</p>";
        assert!(render(&entries).contains(expected));
    }

    #[test]
    fn output_is_deterministic() {
        let entries = parse("Wren (Troglodytes troglodytes), Owl, Jay (Garrulus glandarius)");
        assert_eq!(render(&entries), render(&entries));
    }
}
