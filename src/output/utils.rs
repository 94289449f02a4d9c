//! Shared formatting helpers

use crate::types::EntryKind;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Calculate the continuation prefix for lines beneath a tree entry.
pub fn continuation_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

/// Human-readable size in base-1024 units with two decimals.
///
/// `0` is special-cased to `"0 Bytes"`; sizes beyond the gigabyte range stay
/// in GB.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scale: u64 = 1;
    while unit < SIZE_UNITS.len() - 1 && bytes / scale >= 1024 {
        scale *= 1024;
        unit += 1;
    }

    format!("{:.2} {}", bytes as f64 / scale as f64, SIZE_UNITS[unit])
}

pub fn kind_icon(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Directory => "📁",
        EntryKind::File => "📄",
        EntryKind::Submodule => "📦",
    }
}

/// `name (size)` when a size is known, else just `name`.
pub fn name_with_size(name: &str, size: Option<u64>) -> String {
    match size {
        Some(bytes) => format!("{} ({})", name, format_size(bytes)),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 Bytes");
        assert_eq!(format_size(1), "1.00 Bytes");
        assert_eq!(format_size(1023), "1023.00 Bytes");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5.00 GB");
        assert_eq!(format_size(2048 * 1024 * 1024 * 1024), "2048.00 GB");
    }

    #[test]
    fn test_continuation_prefix() {
        assert_eq!(continuation_prefix("", true), "    ");
        assert_eq!(continuation_prefix("", false), "│   ");
        assert_eq!(continuation_prefix("│   ", true), "│       ");
    }

    #[test]
    fn test_name_with_size() {
        assert_eq!(name_with_size("a.rs", Some(2048)), "a.rs (2.00 KB)");
        assert_eq!(name_with_size("dir", None), "dir");
    }
}
