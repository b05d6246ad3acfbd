pub mod daily_report;
pub mod normalize;
pub mod patterns;

use crate::extraction::PageContent;

pub use daily_report::parse_daily_report;

/// All non-empty lines of the document in reading order, trimmed.
pub fn document_lines(pages: &[PageContent]) -> Vec<&str> {
    pages
        .iter()
        .flat_map(|p| p.lines.iter().map(|s| s.trim()))
        .filter(|l| !l.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lines_spans_pages() {
        let pages = vec![
            PageContent::new(1, "  first  \n\n second"),
            PageContent::new(2, ""),
            PageContent::new(3, "third\n   "),
        ];
        assert_eq!(document_lines(&pages), vec!["first", "second", "third"]);
    }
}
