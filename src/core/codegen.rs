//! Render a catalog as a Rust `const` array declaration.
//!
//! ```text
//! pub(crate) const LIST: [(u32, &str); 2] = [
//! (1,"Annie"),
//! (2,"Olaf"),
//! ];
//! ```
//!
//! The count is written literally, one entry per line, and the file ends at `];` with no
//! trailing newline.

use crate::core::catalog::Catalog;

/// How champion names are placed inside the string literal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NameStyle {
    /// Escape quotes, backslashes and control characters so the output always compiles.
    #[default]
    Escaped,
    /// Copy the name between quotes unchanged.
    Verbatim,
}

/// Build the whole declaration in memory.
pub fn render(catalog: &Catalog, style: NameStyle) -> String {
    let mut out = String::with_capacity(48 + catalog.len() * 24);
    out.push_str(&format!(
        "pub(crate) const LIST: [(u32, &str); {}] = [\n",
        catalog.len()
    ));
    for record in catalog.records() {
        out.push_str(&format!("({},{}),\n", record.key, quote(&record.name, style)));
    }
    out.push_str("];");
    out
}

fn quote(name: &str, style: NameStyle) -> String {
    match style {
        NameStyle::Escaped => {
            let mut out = String::with_capacity(name.len() + 2);
            out.push('"');
            for c in name.chars() {
                // Only what a Rust string literal cannot hold raw; everything else passes through.
                if c == '"' || c == '\\' || c.is_control() {
                    out.extend(c.escape_default());
                } else {
                    out.push(c);
                }
            }
            out.push('"');
            out
        }
        NameStyle::Verbatim => format!("\"{}\"", name),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::core::catalog;

    fn catalog_of(doc: serde_json::Value) -> Catalog {
        catalog::from_value(&doc).unwrap()
    }

    #[test]
    fn render_two_champions() {
        let catalog = catalog_of(json!({"data": {
            "1": {"key": "1", "name": "Annie"},
            "2": {"key": "2", "name": "Olaf"}
        }}));
        assert_eq!(
            render(&catalog, NameStyle::Escaped),
            "pub(crate) const LIST: [(u32, &str); 2] = [\n(1,\"Annie\"),\n(2,\"Olaf\"),\n];"
        );
    }

    #[test]
    fn render_empty_catalog() {
        let catalog = catalog_of(json!({"data": {}}));
        assert_eq!(
            render(&catalog, NameStyle::Escaped),
            "pub(crate) const LIST: [(u32, &str); 0] = [\n];"
        );
    }

    #[test]
    fn header_count_matches_entry_lines() {
        let catalog = catalog_of(json!({"data": {
            "Aatrox": {"key": "266", "name": "Aatrox"},
            "Ahri": {"key": "103", "name": "Ahri"},
            "Akali": {"key": "84", "name": "Akali"},
            "Akshan": {"key": "166", "name": "Akshan"}
        }}));
        let out = render(&catalog, NameStyle::Escaped);
        let lines: Vec<_> = out.lines().collect();
        assert!(lines[0].contains("; 4] = ["));
        let entries = lines.iter().filter(|l| l.starts_with('(')).count();
        assert_eq!(entries, 4);
        assert_eq!(lines[1], "(266,\"Aatrox\"),");
        assert_eq!(lines[4], "(166,\"Akshan\"),");
        assert_eq!(*lines.last().unwrap(), "];");
    }

    #[test]
    fn apostrophes_and_spaces_are_untouched() {
        let catalog = catalog_of(json!({"data": {
            "Kaisa": {"key": "145", "name": "Kai'Sa"},
            "Nunu": {"key": "20", "name": "Nunu & Willump"}
        }}));
        let out = render(&catalog, NameStyle::Escaped);
        assert!(out.contains("(145,\"Kai'Sa\"),\n"));
        assert!(out.contains("(20,\"Nunu & Willump\"),\n"));
        assert_eq!(out, render(&catalog, NameStyle::Verbatim));
    }

    #[test]
    fn escaped_names_quote_special_characters() {
        let catalog = catalog_of(json!({"data": {"X": {"key": "1", "name": "Say \"hi\"\\\n"}}}));
        let out = render(&catalog, NameStyle::Escaped);
        assert!(out.contains(r#"(1,"Say \"hi\"\\\n"),"#), "got: {}", out);
    }

    #[test]
    fn escaped_names_keep_non_ascii_unchanged() {
        let catalog = catalog_of(json!({"data": {
            "Nidalee": {"key": "76", "name": "Nidal\u{e9}e"},
            "Combining": {"key": "1", "name": "e\u{301}"}
        }}));
        let out = render(&catalog, NameStyle::Escaped);
        assert!(out.contains("(76,\"Nidal\u{e9}e\"),\n"), "got: {}", out);
        assert!(out.contains("(1,\"e\u{301}\"),\n"), "got: {}", out);
        assert!(!out.contains("\\u{"), "got: {}", out);
        assert_eq!(out, render(&catalog, NameStyle::Verbatim));
    }

    #[test]
    fn escaped_names_escape_control_characters() {
        let catalog = catalog_of(json!({"data": {"X": {"key": "1", "name": "a\tb\u{7}"}}}));
        let out = render(&catalog, NameStyle::Escaped);
        assert!(out.contains(r#"(1,"a\tb\u{7}"),"#), "got: {}", out);
    }

    #[test]
    fn verbatim_names_are_copied_unchanged() {
        let catalog = catalog_of(json!({"data": {"X": {"key": "1", "name": "Say \"hi\""}}}));
        let out = render(&catalog, NameStyle::Verbatim);
        assert!(out.contains("(1,\"Say \"hi\"\"),"), "got: {}", out);
    }

    #[test]
    fn render_is_deterministic() {
        let catalog = catalog_of(json!({"data": {
            "Zed": {"key": "238", "name": "Zed"},
            "Lux": {"key": "99", "name": "Lux"}
        }}));
        assert_eq!(
            render(&catalog, NameStyle::Escaped),
            render(&catalog, NameStyle::Escaped)
        );
    }
}
