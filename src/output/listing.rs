//! Flat listing formatter

use std::collections::BTreeMap;

use crate::limits::ListFormat;
use crate::types::Entry;

use super::utils::{format_size, kind_icon, name_with_size};

/// Formats a window of entries without building a tree.
pub struct ListingFormatter {
    format: ListFormat,
}

impl ListingFormatter {
    pub fn new(format: ListFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, entries: &[&Entry]) -> String {
        match self.format {
            ListFormat::PathsOnly => Self::format_paths(entries),
            ListFormat::Compact => Self::format_compact(entries),
            ListFormat::Detailed => Self::format_detailed(entries),
        }
    }

    fn format_paths(entries: &[&Entry]) -> String {
        let mut output = String::new();
        for entry in entries {
            output.push_str(&entry.path);
            output.push('\n');
        }
        output
    }

    /// Group by parent directory. The root group (`None`) sorts first.
    fn format_compact(entries: &[&Entry]) -> String {
        let mut groups: BTreeMap<Option<&str>, Vec<&Entry>> = BTreeMap::new();
        for &entry in entries {
            groups.entry(entry.parent()).or_default().push(entry);
        }

        let mut output = String::new();
        for (dir, members) in groups {
            output.push_str(dir.unwrap_or("."));
            output.push_str("/\n");
            for entry in members {
                output.push_str("  ");
                output.push_str(kind_icon(entry.kind));
                output.push(' ');
                output.push_str(&name_with_size(entry.name(), entry.size));
                output.push('\n');
            }
        }
        output
    }

    fn format_detailed(entries: &[&Entry]) -> String {
        let mut blocks = Vec::with_capacity(entries.len());
        for entry in entries {
            let mut block = format!(
                "{}\n  Type: {}\n  SHA: {}\n",
                entry.path, entry.kind, entry.identity
            );
            if let Some(size) = entry.size {
                block.push_str(&format!("  Size: {}\n", format_size(size)));
            }
            block.push_str(&format!("  URL: {}\n", entry.locator));
            blocks.push(block);
        }
        blocks.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryKind;

    fn sample() -> Vec<Entry> {
        vec![
            Entry::file("README.md", 40).with_locator("https://example.test/README.md"),
            Entry::directory("src"),
            Entry::file("src/index.ts", 1536),
            Entry::new("src/vendor", EntryKind::Submodule, "c0ffee"),
            Entry::file("docs/guide.md", 0),
        ]
    }

    #[test]
    fn test_paths_only() {
        let entries = sample();
        let refs: Vec<&Entry> = entries.iter().collect();
        let output = ListingFormatter::new(ListFormat::PathsOnly).format(&refs);
        assert_eq!(
            output,
            "README.md\nsrc\nsrc/index.ts\nsrc/vendor\ndocs/guide.md\n"
        );
    }

    #[test]
    fn test_compact_groups_by_directory() {
        let entries = sample();
        let refs: Vec<&Entry> = entries.iter().collect();
        let output = ListingFormatter::new(ListFormat::Compact).format(&refs);

        let expected = "./\n\
                        \x20\x20📄 README.md (40.00 Bytes)\n\
                        \x20\x20📁 src\n\
                        docs/\n\
                        \x20\x20📄 guide.md (0 Bytes)\n\
                        src/\n\
                        \x20\x20📄 index.ts (1.50 KB)\n\
                        \x20\x20📦 vendor\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_detailed_blocks() {
        let entries = sample();
        let refs: Vec<&Entry> = entries.iter().take(2).collect();
        let output = ListingFormatter::new(ListFormat::Detailed).format(&refs);

        assert!(output.starts_with("README.md\n  Type: file\n  SHA: blob:README.md\n"));
        assert!(output.contains("  Size: 40.00 Bytes\n"));
        assert!(output.contains("  URL: https://example.test/README.md\n"));
        assert!(output.contains("\nsrc\n  Type: directory\n"));
        // directories have no size line
        assert_eq!(output.matches("Size:").count(), 1);
    }

    #[test]
    fn test_empty_window() {
        for format in [ListFormat::PathsOnly, ListFormat::Compact, ListFormat::Detailed] {
            assert_eq!(ListingFormatter::new(format).format(&[]), "");
        }
    }
}
