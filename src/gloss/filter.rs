//! The list pipeline: filter, sort, paginate.
//!
//! Filters narrow in a fixed order (category, then tags, then free-text
//! query on the term), the survivors are sorted case-insensitively by term,
//! and offset/limit slice the result. Stored order is never mutated.

use crate::model::Entry;

/// Criteria for the `list` pipeline. Defaults mean "everything".
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    /// Exact category, compared case-insensitively.
    pub category: Option<String>,
    /// Tags to match, case-insensitively. All must be present unless
    /// `match_any` is set.
    pub tags: Vec<String>,
    pub match_any: bool,
    /// Substring match on the term only, applied after category/tag filters.
    pub query: Option<String>,
    /// Negative values clamp to 0.
    pub offset: i64,
    /// Negative values clamp to 0; 0 means unlimited.
    pub limit: i64,
}

impl ListFilter {
    /// Whether any narrowing criterion is set (pagination does not count).
    pub fn is_filtered(&self) -> bool {
        self.category.is_some() || !self.tags.is_empty() || self.query.is_some()
    }
}

/// One page of filtered, sorted entries. `total` counts matches before
/// pagination.
#[derive(Debug)]
pub struct ListPage {
    pub entries: Vec<Entry>,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
}

impl ListPage {
    pub fn shown(&self) -> usize {
        self.entries.len()
    }
}

pub fn run(entries: &[Entry], filter: &ListFilter) -> ListPage {
    let mut matched: Vec<&Entry> = entries.iter().collect();

    if let Some(category) = &filter.category {
        let category = category.to_lowercase();
        matched.retain(|e| e.category.as_deref().unwrap_or("").to_lowercase() == category);
    }

    if !filter.tags.is_empty() {
        let wanted: Vec<String> = filter.tags.iter().map(|t| t.to_lowercase()).collect();
        matched.retain(|e| {
            let entry_tags: Vec<String> = e.tags.iter().map(|t| t.to_lowercase()).collect();
            if filter.match_any {
                wanted.iter().any(|t| entry_tags.contains(t))
            } else {
                wanted.iter().all(|t| entry_tags.contains(t))
            }
        });
    }

    if let Some(query) = &filter.query {
        let query = query.to_lowercase();
        matched.retain(|e| e.term.to_lowercase().contains(&query));
    }

    // Ordinal comparison of the lowercased terms; stable, locale-agnostic.
    matched.sort_by_key(|e| e.term.to_lowercase());

    let total = matched.len();
    let offset = filter.offset.max(0) as usize;
    let limit = filter.limit.max(0) as usize;

    let remaining = matched.into_iter().skip(offset);
    let page: Vec<Entry> = if limit > 0 {
        remaining.take(limit).cloned().collect()
    } else {
        remaining.cloned().collect()
    };

    ListPage {
        entries: page,
        total,
        offset,
        limit,
    }
}
