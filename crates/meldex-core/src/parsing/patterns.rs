// Recall-biased regex matching over loosely formatted PDF text. Each rule
// stands alone; there is no grammar behind them.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

use crate::model::{CategoryTag, ReferenceCode};
use crate::parsing::normalize::normalize_reference;

/// `NN-NN-NN`, then optionally a `/NN` group and/or a letter suffix
/// (with or without a hyphen), in either order.
static REF_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\d{2}-\d{2}-\d{2}(?:/\d{2})?(?:-?[A-Z])?(?:/\d{2})?\b").unwrap()
});

static CANONICAL_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{2}-\d{2}-\d{2}(?:/\d{2})?[A-Z]?(?:/\d{2})?$").unwrap()
});

// Applied to uppercased text. Leftmost-first alternation keeps IIIA/IIIB
// ahead of III, and III ahead of II.
static CATEGORY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"CAT\s*(?:3[AB]|IIIB|IIIA|III|II|I\b)").unwrap()
});

static ROW_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<tail>[A-Z0-9]{1,2}-[A-Z0-9]{3})\s+(?P<wo>\d{6,})(?:\s+(?P<rest>.*))?$")
        .unwrap()
});

static MEL_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bMEL\b\s*").unwrap());

static SECTION_STOP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^MEL\s*/\s*CDL\s+ITEMS").unwrap());

/// Cheap substring gate run before any regex scan of a segment.
pub fn has_index_trigger(text: &str) -> bool {
    text.contains('-') || has_category_trigger(text)
}

/// `CAT` (case-sensitive) or `autoland` (any case) appears in the text.
pub fn has_category_trigger(text: &str) -> bool {
    text.contains("CAT") || mentions_autoland(text)
}

fn mentions_autoland(text: &str) -> bool {
    text.to_lowercase().contains("autoland")
}

/// Every distinct normalized code in `text`, paired with the byte range of its
/// first occurrence, in order of first appearance.
pub fn reference_occurrences(text: &str) -> Vec<(ReferenceCode, Range<usize>)> {
    let mut out: Vec<(ReferenceCode, Range<usize>)> = Vec::new();
    for m in REF_CODE_RE.find_iter(text) {
        let code = normalize_reference(m.as_str());
        if !out.iter().any(|(seen, _)| *seen == code) {
            out.push((code, m.range()));
        }
    }
    out
}

/// The first reference code in `text`, normalized.
pub fn first_reference(text: &str) -> Option<ReferenceCode> {
    REF_CODE_RE
        .find(text)
        .map(|m| normalize_reference(m.as_str()))
}

/// Normalize a user-supplied code, rejecting anything that is not code-shaped.
pub fn parse_reference(raw: &str) -> Option<ReferenceCode> {
    let code = normalize_reference(raw);
    CANONICAL_REF_RE.is_match(code.as_str()).then_some(code)
}

/// Category tags in `window`, deduplicated, in order of first appearance.
/// `AUTOLAND` is checked separately from the `CAT` phrases and goes last.
pub fn category_tags(window: &str) -> Vec<CategoryTag> {
    let upper = window.to_uppercase();
    let mut tags: Vec<CategoryTag> = Vec::new();
    for m in CATEGORY_RE.find_iter(&upper) {
        if let Some(tag) = CategoryTag::from_label(m.as_str()) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    if mentions_autoland(window) {
        tags.push(CategoryTag::Autoland);
    }
    tags
}

/// Fields of a line that opens a new daily report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowStart<'a> {
    pub tail: &'a str,
    pub wo: &'a str,
    pub rest: &'a str,
}

/// Match the `TAIL WO rest...` prefix of a table row.
pub fn match_row_start(line: &str) -> Option<RowStart<'_>> {
    let caps = ROW_START_RE.captures(line)?;
    Some(RowStart {
        tail: caps.name("tail")?.as_str(),
        wo: caps.name("wo")?.as_str(),
        rest: caps.name("rest").map(|m| m.as_str().trim()).unwrap_or(""),
    })
}

/// Remove the `MEL` column label wherever it stands as a word.
pub fn strip_mel_label(rest: &str) -> String {
    MEL_LABEL_RE.replace_all(rest, "").trim().to_string()
}

/// `MEL/CDL Items` section header, any spacing around the slash.
pub fn is_section_stop(line: &str) -> bool {
    SECTION_STOP_RE.is_match(line.trim())
}

/// The match at `range` plus up to `chars` characters on either side.
pub fn char_window(text: &str, range: Range<usize>, chars: usize) -> &str {
    let start = if chars == 0 {
        range.start
    } else {
        text[..range.start]
            .char_indices()
            .rev()
            .nth(chars - 1)
            .map(|(i, _)| i)
            .unwrap_or(0)
    };
    let end = text[range.end..]
        .char_indices()
        .nth(chars)
        .map(|(i, _)| range.end + i)
        .unwrap_or(text.len());
    &text[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(text: &str) -> Vec<String> {
        reference_occurrences(text)
            .into_iter()
            .map(|(c, _)| c.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_reference_variants() {
        assert_eq!(codes("see 27-31-06A and 21-10-01/02"), ["27-31-06A", "21-10-01/02"]);
        assert_eq!(codes("item 12-34-56-A applies"), ["12-34-56A"]);
        assert_eq!(codes("31-30-07c"), ["31-30-07C"]);
    }

    #[test]
    fn test_reference_dedup_keeps_first_range() {
        let occ = reference_occurrences("21-10-01 x 21-10-01 y 12-34-56-A 12-34-56A");
        assert_eq!(occ.len(), 2);
        assert_eq!(occ[0].1, 0..8);
        assert_eq!(occ[1].0.as_str(), "12-34-56A");
    }

    #[test]
    fn test_reference_needs_word_boundaries() {
        assert!(codes("121-10-011").is_empty());
        assert!(codes("no codes - here").is_empty());
        assert_eq!(codes("21-10-01-AB"), ["21-10-01"]);
    }

    #[test]
    fn test_first_reference() {
        let code = first_reference("Open MEL 21-10-01-b then 22-00-00").unwrap();
        assert_eq!(code.as_str(), "21-10-01B");
        assert!(first_reference("nothing").is_none());
    }

    #[test]
    fn test_parse_reference() {
        assert_eq!(parse_reference("27-31-06-a").unwrap().as_str(), "27-31-06A");
        assert!(parse_reference("27-31").is_none());
        assert!(parse_reference("27-31-06 extra").is_none());
    }

    #[test]
    fn test_triggers() {
        assert!(has_index_trigger("page - 3"));
        assert!(has_index_trigger("CAT II"));
        assert!(has_index_trigger("AutoLand inop"));
        assert!(!has_index_trigger("Cat ii only lowercase cat"));
        assert!(!has_category_trigger("21-10-01"));
    }

    #[test]
    fn test_category_tags_order_and_dedup() {
        let tags = category_tags("CAT IIIA ops; CAT II minima; CAT IIIA again; cat 3b");
        assert_eq!(
            tags,
            vec![CategoryTag::CatIIIA, CategoryTag::CatII, CategoryTag::Cat3B]
        );
    }

    #[test]
    fn test_category_tags_lenient_matching() {
        // "CATI" inside a longer word is not a tag, but a bare "CAT I" is.
        assert!(category_tags("CATION exchange").is_empty());
        assert_eq!(category_tags("CAT I approach"), vec![CategoryTag::CatI]);
        // No trailing boundary after II/III: "CAT IIS" still counts as CAT II.
        assert_eq!(category_tags("CAT IIS"), vec![CategoryTag::CatII]);
    }

    #[test]
    fn test_category_tags_autoland() {
        assert_eq!(
            category_tags("Autoland not permitted, CAT III"),
            vec![CategoryTag::CatIII, CategoryTag::Autoland]
        );
    }

    #[test]
    fn test_match_row_start() {
        let row = match_row_start("A6-ABC 123456 MEL 21-10-01 Pack valve fault").unwrap();
        assert_eq!(row.tail, "A6-ABC");
        assert_eq!(row.wo, "123456");
        assert_eq!(row.rest, "MEL 21-10-01 Pack valve fault");
    }

    #[test]
    fn test_match_row_start_without_rest() {
        let row = match_row_start("HA-LYG 7654321").unwrap();
        assert_eq!(row.rest, "");
    }

    #[test]
    fn test_row_start_rejects_short_wo_and_leading_text() {
        assert!(match_row_start("A6-ABC 12345 desc").is_none());
        assert!(match_row_start("see A6-ABC 123456 desc").is_none());
        assert!(match_row_start("ABC-DEF 123456 desc").is_none());
    }

    #[test]
    fn test_strip_mel_label() {
        assert_eq!(strip_mel_label("MEL 21-10-01 Pack valve"), "21-10-01 Pack valve");
        assert_eq!(strip_mel_label("20.02.2026 mel 21-10-01"), "20.02.2026 21-10-01");
        assert_eq!(strip_mel_label("MELT ice"), "MELT ice");
    }

    #[test]
    fn test_section_stop() {
        assert!(is_section_stop("MEL/CDL Items"));
        assert!(is_section_stop("MEL / CDL Items (continued)"));
        assert!(!is_section_stop("Reg No WO Open/Due Date MEL/CDL Description"));
    }

    #[test]
    fn test_char_window() {
        let text = "abcdef 21-10-01 ghijkl";
        let range = 7..15;
        assert_eq!(char_window(text, range.clone(), 3), "ef 21-10-01 gh");
        assert_eq!(char_window(text, range.clone(), 100), text);
        assert_eq!(char_window(text, range, 0), "21-10-01");
    }
}
