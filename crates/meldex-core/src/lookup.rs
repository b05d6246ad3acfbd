use crate::error::MeldexError;
use crate::index::ReferenceIndex;
use crate::model::{CategoryEntry, DailyReportRow, RefEntry, ReferenceCode};
use crate::parsing::patterns::parse_reference;

/// What the index knows about one reference code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupHit<'a> {
    pub code: ReferenceCode,
    pub entry: Option<&'a RefEntry>,
    pub categories: Option<&'a CategoryEntry>,
}

impl LookupHit<'_> {
    pub fn is_found(&self) -> bool {
        self.entry.is_some() || self.categories.is_some()
    }
}

/// Look up a code as a user would type it (`27-31-06-a`, `27-31-06A`, ...).
pub fn lookup_reference<'a>(
    index: &'a ReferenceIndex,
    query: &str,
) -> Result<LookupHit<'a>, MeldexError> {
    let code = parse_reference(query)
        .ok_or_else(|| MeldexError::UnknownReference(query.trim().to_string()))?;
    Ok(LookupHit {
        entry: index.refs.get(&code),
        categories: index.cat_summary.get(code.as_str()),
        code,
    })
}

/// Daily report rows whose reference code equals `query` or whose tail does
/// (tail comparison ignores case).
pub fn matching_rows<'a>(rows: &'a [DailyReportRow], query: &str) -> Vec<&'a DailyReportRow> {
    let query = query.trim();
    let code = parse_reference(query);
    rows.iter()
        .filter(|row| {
            row.tail.eq_ignore_ascii_case(query)
                || (code.is_some() && row.mel_ref.as_ref() == code.as_ref())
        })
        .collect()
}
