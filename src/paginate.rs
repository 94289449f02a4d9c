//! Windowing over filtered entries

use crate::types::Entry;

/// Requested window. A missing limit means "everything after the offset".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: Option<usize>,
    /// Negative offsets are clamped to zero.
    pub offset: Option<i64>,
}

impl PageRequest {
    pub fn new(limit: Option<usize>, offset: Option<i64>) -> Self {
        Self { limit, offset }
    }

    pub fn effective_offset(&self) -> usize {
        self.offset
            .map_or(0, |o| usize::try_from(o.max(0)).unwrap_or(usize::MAX))
    }
}

/// A sorted window over the filtered entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    pub window: Vec<&'a Entry>,
    /// Filtered count, independent of the window.
    pub total: usize,
    pub showing: usize,
    pub offset: usize,
}

impl Page<'_> {
    pub fn empty() -> Self {
        Page {
            window: Vec::new(),
            total: 0,
            showing: 0,
            offset: 0,
        }
    }
}

/// Sort entries by path (byte-wise) and cut the requested window.
pub fn paginate<'a>(mut entries: Vec<&'a Entry>, request: PageRequest) -> Page<'a> {
    entries.sort_by(|a, b| a.path.cmp(&b.path));

    let total = entries.len();
    let offset = request.effective_offset();
    let window: Vec<&Entry> = entries
        .into_iter()
        .skip(offset)
        .take(request.limit.unwrap_or(usize::MAX))
        .collect();

    Page {
        showing: window.len(),
        window,
        total,
        offset,
    }
}

/// Continuation details derived from a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationHint {
    pub has_more: bool,
    pub next_offset: usize,
    pub total: usize,
}

impl PaginationHint {
    pub fn from_page(page: &Page<'_>) -> Self {
        let next_offset = page.offset.saturating_add(page.showing);
        Self {
            has_more: page.total > next_offset,
            next_offset,
            total: page.total,
        }
    }
}
