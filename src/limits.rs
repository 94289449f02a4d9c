//! Output formats and their default page sizes
//!
//! The default limit for each format lives in a lookup table rather than in
//! branching code, so callers can inspect or override it per format.

use std::fmt;

use clap::ValueEnum;

/// Whether the result is rendered as a flat listing or a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputMode {
    Listing,
    Tree,
}

/// Formats for the flat listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum ListFormat {
    /// Entries grouped by directory with icons and sizes
    #[default]
    Compact,
    /// One block per entry with all metadata
    Detailed,
    /// Bare paths, one per line
    PathsOnly,
}

/// Formats for the hierarchical view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum TreeFormat {
    /// Box-drawing connectors
    #[default]
    Tree,
    /// Two-space indentation, no connectors
    SimpleTree,
    /// Connectors plus identity and locator lines under files
    Detailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Listing(ListFormat),
    Tree(TreeFormat),
}

impl OutputFormat {
    pub fn mode(&self) -> OutputMode {
        match self {
            OutputFormat::Listing(_) => OutputMode::Listing,
            OutputFormat::Tree(_) => OutputMode::Tree,
        }
    }
}

impl From<ListFormat> for OutputFormat {
    fn from(format: ListFormat) -> Self {
        OutputFormat::Listing(format)
    }
}

impl From<TreeFormat> for OutputFormat {
    fn from(format: TreeFormat) -> Self {
        OutputFormat::Tree(format)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Listing(ListFormat::Compact) => "compact",
            OutputFormat::Listing(ListFormat::Detailed) => "detailed",
            OutputFormat::Listing(ListFormat::PathsOnly) => "paths-only",
            OutputFormat::Tree(TreeFormat::Tree) => "tree",
            OutputFormat::Tree(TreeFormat::SimpleTree) => "simple-tree",
            OutputFormat::Tree(TreeFormat::Detailed) => "detailed",
        };
        f.write_str(name)
    }
}

const DEFAULT_LIMIT_TABLE: [(OutputFormat, usize); 6] = [
    (OutputFormat::Listing(ListFormat::Detailed), 50),
    (OutputFormat::Listing(ListFormat::Compact), 200),
    (OutputFormat::Listing(ListFormat::PathsOnly), 500),
    (OutputFormat::Tree(TreeFormat::Detailed), 30),
    (OutputFormat::Tree(TreeFormat::Tree), 100),
    (OutputFormat::Tree(TreeFormat::SimpleTree), 150),
];

/// Page size used when the caller does not pass a limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultLimits {
    table: Vec<(OutputFormat, usize)>,
}

impl DefaultLimits {
    /// Replace the default for one format.
    pub fn with(mut self, format: impl Into<OutputFormat>, limit: usize) -> Self {
        let format = format.into();
        match self.table.iter_mut().find(|(f, _)| *f == format) {
            Some(slot) => slot.1 = limit,
            None => self.table.push((format, limit)),
        }
        self
    }

    pub fn get(&self, format: impl Into<OutputFormat>) -> usize {
        let format = format.into();
        self.table
            .iter()
            .find(|(f, _)| *f == format)
            .map(|(_, limit)| *limit)
            .unwrap_or(0)
    }

    /// The caller's limit if given, else this table's default.
    pub fn resolve(&self, format: impl Into<OutputFormat>, limit: Option<usize>) -> usize {
        limit.unwrap_or_else(|| self.get(format))
    }
}

impl Default for DefaultLimits {
    fn default() -> Self {
        Self {
            table: DEFAULT_LIMIT_TABLE.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let limits = DefaultLimits::default();
        assert_eq!(limits.get(ListFormat::Detailed), 50);
        assert_eq!(limits.get(ListFormat::Compact), 200);
        assert_eq!(limits.get(ListFormat::PathsOnly), 500);
        assert_eq!(limits.get(TreeFormat::Detailed), 30);
        assert_eq!(limits.get(TreeFormat::Tree), 100);
        assert_eq!(limits.get(TreeFormat::SimpleTree), 150);
    }

    #[test]
    fn test_detailed_differs_by_mode() {
        let limits = DefaultLimits::default();
        assert_ne!(
            limits.get(ListFormat::Detailed),
            limits.get(TreeFormat::Detailed)
        );
    }

    #[test]
    fn test_override_one_format() {
        let limits = DefaultLimits::default().with(TreeFormat::Tree, 7);
        assert_eq!(limits.get(TreeFormat::Tree), 7);
        assert_eq!(limits.get(TreeFormat::SimpleTree), 150);
    }

    #[test]
    fn test_resolve_prefers_explicit_limit() {
        let limits = DefaultLimits::default();
        assert_eq!(limits.resolve(ListFormat::Compact, Some(3)), 3);
        assert_eq!(limits.resolve(ListFormat::Compact, None), 200);
    }

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from(ListFormat::PathsOnly).to_string(), "paths-only");
        assert_eq!(OutputFormat::from(TreeFormat::SimpleTree).to_string(), "simple-tree");
        assert_eq!(OutputFormat::from(TreeFormat::Tree).mode(), OutputMode::Tree);
    }
}
