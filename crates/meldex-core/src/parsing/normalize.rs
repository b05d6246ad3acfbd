use regex::Regex;
use std::sync::LazyLock;

use crate::model::ReferenceCode;

static SUFFIX_HYPHEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2}-\d{2}-\d{2}(?:/\d{2})?)-([A-Z])(/\d{2})?$").unwrap()
});

/// Normalize a reference code as written in a document to its canonical form.
///
/// Steps:
/// 1. Drop whitespace and uppercase
/// 2. Fold a hyphen before a single trailing letter into the code:
///    `12-34-56-A` -> `12-34-56A`, `12-34-56-a/02` -> `12-34-56A/02`
///
/// Everything else is left as written, so the function is idempotent.
pub fn normalize_reference(raw: &str) -> ReferenceCode {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();
    let canonical = SUFFIX_HYPHEN_RE.replace(&compact, "${1}${2}${3}");
    ReferenceCode::from_canonical(canonical.into_owned())
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First `max_chars` characters of `s` (never splits a UTF-8 sequence).
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Whitespace-collapsed snippet of at most `max_chars` characters.
pub fn snippet(text: &str, max_chars: usize) -> String {
    truncate_chars(&collapse_whitespace(text), max_chars).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(s: &str) -> String {
        normalize_reference(s).as_str().to_string()
    }

    #[test]
    fn test_plain_code_unchanged() {
        assert_eq!(norm("21-10-01"), "21-10-01");
        assert_eq!(norm("27-31-06A"), "27-31-06A");
    }

    #[test]
    fn test_hyphenated_suffix_folded() {
        assert_eq!(norm("12-34-56-A"), "12-34-56A");
        assert_eq!(norm("12-34-56-a"), "12-34-56A");
    }

    #[test]
    fn test_secondary_group_kept() {
        assert_eq!(norm("21-10-01/02"), "21-10-01/02");
        assert_eq!(norm("21-10-01/02-B"), "21-10-01/02B");
        assert_eq!(norm("31-30-07-c/01"), "31-30-07C/01");
    }

    #[test]
    fn test_whitespace_variants_converge() {
        assert_eq!(norm(" 27-31-06 A "), norm("27-31-06-A"));
        assert_eq!(norm("27-31-06 -A"), "27-31-06A");
    }

    #[test]
    fn test_idempotent() {
        for raw in [
            "12-34-56-A",
            "12-34-56a",
            "21-10-01/02",
            "21-10-01/02-b",
            "31-30-07-C/01",
            " 27-31-06 ",
        ] {
            let once = normalize_reference(raw);
            let twice = normalize_reference(once.as_str());
            assert_eq!(once, twice, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  CAT\n II \t minima "), "CAT II minima");
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("Ürítés", 2), "Ür");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn test_snippet() {
        assert_eq!(snippet("a  b\n\nc d", 5), "a b c");
    }
}
