use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Range;

use crate::config::{CategoryWindow, Granularity, IndexConfig};
use crate::extraction::PageContent;
use crate::model::{CategoryEntry, CategoryTag, RefEntry, ReferenceCode, NO_REF_KEY};
use crate::parsing::normalize::{collapse_whitespace, snippet, truncate_chars};
use crate::parsing::patterns::{
    category_tags, char_window, has_category_trigger, has_index_trigger, reference_occurrences,
};

/// Deduplicated reference codes and the category context recorded for them.
///
/// Both maps are ordered by key so that emitted JSON is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceIndex {
    pub refs: BTreeMap<ReferenceCode, RefEntry>,
    /// Keyed by reference code, or [`NO_REF_KEY`] for tags found in a segment
    /// without any code.
    pub cat_summary: BTreeMap<String, CategoryEntry>,
}

/// Builds a [`ReferenceIndex`] one segment at a time.
///
/// Every key is insert-if-absent: the first segment that mentions a code
/// fixes its `refs` entry, and the first category-bearing segment fixes its
/// `cat_summary` entry.
#[derive(Debug)]
pub struct ReferenceIndexBuilder {
    window: CategoryWindow,
    ref_snippet_chars: usize,
    cat_snippet_chars: usize,
    index: ReferenceIndex,
    scanned: usize,
    skipped: usize,
}

impl ReferenceIndexBuilder {
    pub fn new(config: &IndexConfig) -> Self {
        ReferenceIndexBuilder {
            window: config.window(),
            ref_snippet_chars: config.ref_snippet_chars,
            cat_snippet_chars: config.cat_snippet_chars,
            index: ReferenceIndex::default(),
            scanned: 0,
            skipped: 0,
        }
    }

    /// Scan one segment. Absent or blank text contributes nothing.
    pub fn add_segment(&mut self, location: usize, text: Option<&str>) {
        let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
            tracing::debug!(location, "segment has no text");
            self.skipped += 1;
            return;
        };

        if !has_index_trigger(text) {
            self.skipped += 1;
            return;
        }
        self.scanned += 1;

        let occurrences = reference_occurrences(text);
        if !occurrences.is_empty() {
            let ref_snippet = snippet(text, self.ref_snippet_chars);
            for (code, _) in &occurrences {
                self.index
                    .refs
                    .entry(code.clone())
                    .or_insert_with(|| RefEntry {
                        page: location,
                        snippet: ref_snippet.clone(),
                    });
            }
        }

        if has_category_trigger(text) {
            self.record_categories(location, text, &occurrences);
        }
    }

    fn record_categories(
        &mut self,
        location: usize,
        text: &str,
        occurrences: &[(ReferenceCode, Range<usize>)],
    ) {
        let collapsed = collapse_whitespace(text);
        let segment_tags = category_tags(&collapsed);
        if segment_tags.is_empty() {
            return;
        }

        let mut attached = false;
        let window = self.window;
        match window {
            CategoryWindow::Segment => {
                let cat_snippet = truncate_chars(&collapsed, self.cat_snippet_chars);
                for (code, _) in occurrences {
                    self.insert_category(code.to_string(), location, &segment_tags, cat_snippet);
                    attached = true;
                }
            }
            CategoryWindow::Span { chars } => {
                for (code, range) in occurrences {
                    let span = char_window(text, range.clone(), chars);
                    let tags = category_tags(span);
                    if tags.is_empty() {
                        continue;
                    }
                    let cat_snippet = snippet(span, self.cat_snippet_chars);
                    self.insert_category(code.to_string(), location, &tags, &cat_snippet);
                    attached = true;
                }
            }
        }

        if !attached {
            let cat_snippet = truncate_chars(&collapsed, self.cat_snippet_chars);
            self.insert_category(NO_REF_KEY.to_string(), location, &segment_tags, cat_snippet);
        }
    }

    fn insert_category(&mut self, key: String, location: usize, cats: &[CategoryTag], snippet: &str) {
        self.index
            .cat_summary
            .entry(key)
            .or_insert_with(|| CategoryEntry {
                page: location,
                cats: cats.to_vec(),
                snippet: snippet.to_string(),
            });
    }

    pub fn finish(self) -> ReferenceIndex {
        tracing::info!(
            refs = self.index.refs.len(),
            cat = self.index.cat_summary.len(),
            scanned = self.scanned,
            skipped = self.skipped,
            "built reference index"
        );
        self.index
    }
}

/// Index extracted pages at the granularity named in `config`.
///
/// Line locations are 1-based physical line numbers counted across the whole
/// document, blank lines included.
pub fn build_reference_index(pages: &[PageContent], config: &IndexConfig) -> ReferenceIndex {
    let mut builder = ReferenceIndexBuilder::new(config);
    match config.granularity {
        Granularity::Page => {
            for page in pages {
                builder.add_segment(page.page_number, page.text().as_deref());
            }
        }
        Granularity::Line => {
            let lines = pages.iter().flat_map(|p| p.lines.iter());
            for (i, line) in lines.enumerate() {
                let line = line.trim();
                if !line.is_empty() {
                    builder.add_segment(i + 1, Some(line));
                }
            }
        }
    }
    builder.finish()
}
