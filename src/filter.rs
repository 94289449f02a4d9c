//! Entry filtering by kind and glob pattern
//!
//! Supported glob dialect (via the `glob` crate):
//! - `*` matches within a single path segment, never across `/`
//! - `**` as a whole path component matches any number of directories
//! - `?` and `[...]` character classes
//!
//! A pattern without any `/` is also tried against the entry's basename, so
//! `*.md` matches `docs/guide.md`. Brace expansion and extglob are not
//! supported. Matching is case-sensitive.

use clap::ValueEnum;
use glob::{MatchOptions, Pattern};

use crate::error::{Error, Result};
use crate::types::{Entry, EntryKind, basename};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Which entry kinds to keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum KindFilter {
    /// Keep every entry
    #[default]
    All,
    /// Keep only files
    Files,
    /// Keep only directories
    Directories,
}

impl KindFilter {
    pub fn accepts(&self, kind: EntryKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Files => kind == EntryKind::File,
            KindFilter::Directories => kind == EntryKind::Directory,
        }
    }
}

/// A compiled path glob.
#[derive(Debug, Clone)]
pub struct PathPattern {
    pattern: Pattern,
    basename_fallback: bool,
}

impl PathPattern {
    /// Compile a glob. Malformed patterns are reported, never ignored.
    pub fn new(pattern: &str) -> Result<Self> {
        let compiled = Pattern::new(pattern).map_err(|e| Error::invalid_pattern(pattern, e))?;
        Ok(Self {
            pattern: compiled,
            basename_fallback: !pattern.contains('/'),
        })
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn matches(&self, path: &str) -> bool {
        if self.pattern.matches_with(path, MATCH_OPTIONS) {
            return true;
        }
        self.basename_fallback && self.pattern.matches_with(basename(path), MATCH_OPTIONS)
    }
}

/// Kind and pattern criteria applied to a listing.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    kind: KindFilter,
    pattern: Option<PathPattern>,
}

impl PathFilter {
    pub fn new(kind: KindFilter, pattern: Option<&str>) -> Result<Self> {
        let pattern = pattern.map(PathPattern::new).transpose()?;
        Ok(Self { kind, pattern })
    }

    pub fn kind(&self) -> KindFilter {
        self.kind
    }

    pub fn pattern(&self) -> Option<&PathPattern> {
        self.pattern.as_ref()
    }

    /// Kind first, then pattern.
    pub fn is_included(&self, entry: &Entry) -> bool {
        if !self.kind.accepts(entry.kind) {
            return false;
        }
        match &self.pattern {
            Some(p) => p.matches(&entry.path),
            None => true,
        }
    }

    /// Select matching entries into a new vector. Input order is preserved;
    /// sorting is the paginator's job.
    pub fn apply<'a>(&self, entries: &'a [Entry]) -> Vec<&'a Entry> {
        entries.iter().filter(|e| self.is_included(e)).collect()
    }
}

/// Convenience wrapper compiling the filter and applying it in one step.
pub fn filter_entries<'a>(
    entries: &'a [Entry],
    kind: KindFilter,
    pattern: Option<&str>,
) -> Result<Vec<&'a Entry>> {
    Ok(PathFilter::new(kind, pattern)?.apply(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Entry> {
        vec![
            Entry::directory("src"),
            Entry::file("src/index.ts", 120),
            Entry::file("README.md", 40),
            Entry::directory("docs"),
            Entry::file("docs/guide/intro.md", 10),
            Entry::new("vendor/lib", EntryKind::Submodule, "c0ffee"),
        ]
    }

    fn paths(entries: &[&Entry]) -> Vec<String> {
        entries.iter().map(|e| e.path.clone()).collect()
    }

    #[test]
    fn test_kind_filter() {
        let entries = sample();
        let files = filter_entries(&entries, KindFilter::Files, None).unwrap();
        assert_eq!(
            paths(&files),
            vec!["src/index.ts", "README.md", "docs/guide/intro.md"]
        );

        let dirs = filter_entries(&entries, KindFilter::Directories, None).unwrap();
        assert_eq!(paths(&dirs), vec!["src", "docs"]);

        let all = filter_entries(&entries, KindFilter::All, None).unwrap();
        assert_eq!(all.len(), entries.len());
    }

    #[test]
    fn test_basename_match_for_slashless_pattern() {
        let entries = sample();
        let md = filter_entries(&entries, KindFilter::All, Some("*.md")).unwrap();
        assert_eq!(paths(&md), vec!["README.md", "docs/guide/intro.md"]);
    }

    #[test]
    fn test_single_star_does_not_cross_separator() {
        let pattern = PathPattern::new("docs/*.md").unwrap();
        assert!(pattern.matches("docs/readme.md"));
        assert!(!pattern.matches("docs/guide/intro.md"));
    }

    #[test]
    fn test_double_star_crosses_separator() {
        let pattern = PathPattern::new("docs/**/*.md").unwrap();
        assert!(pattern.matches("docs/guide/intro.md"));
        assert!(pattern.matches("docs/a/b/c/deep.md"));
        assert!(!pattern.matches("src/index.md"));
    }

    #[test]
    fn test_pattern_with_slash_has_no_basename_fallback() {
        let pattern = PathPattern::new("guide/*.md").unwrap();
        assert!(!pattern.matches("docs/guide/intro.md"));
        assert!(pattern.matches("guide/intro.md"));
    }

    #[test]
    fn test_directory_excluded_by_file_pattern() {
        let entries = vec![
            Entry::directory("src"),
            Entry::file("src/index.ts", 120),
            Entry::file("README.md", 40),
        ];
        let filtered = filter_entries(&entries, KindFilter::All, Some("*.md")).unwrap();
        assert_eq!(paths(&filtered), vec!["README.md"]);
    }

    #[test]
    fn test_kind_and_pattern_commute() {
        let entries = sample();
        let filter = PathFilter::new(KindFilter::Files, Some("*.md")).unwrap();
        let kind_first = filter.apply(&entries);

        let pattern = PathPattern::new("*.md").unwrap();
        let pattern_first: Vec<&Entry> = entries
            .iter()
            .filter(|e| pattern.matches(&e.path))
            .filter(|e| KindFilter::Files.accepts(e.kind))
            .collect();

        assert_eq!(kind_first, pattern_first);
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = PathFilter::new(KindFilter::All, Some("src/[abc")).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));

        let err = PathPattern::new("a**b").unwrap_err();
        assert!(err.to_string().contains("a**b"));
    }

    #[test]
    fn test_does_not_mutate_input() {
        let entries = sample();
        let before = entries.clone();
        let _ = filter_entries(&entries, KindFilter::Files, Some("*.ts")).unwrap();
        assert_eq!(entries, before);
    }

    #[test]
    fn test_character_classes() {
        let pattern = PathPattern::new("file?.[ch]").unwrap();
        assert!(pattern.matches("src/file1.c"));
        assert!(pattern.matches("file2.h"));
        assert!(!pattern.matches("file10.c"));
    }
}
