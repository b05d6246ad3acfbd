use serde::{Deserialize, Serialize};
use std::fmt;

/// Key under which category tags are kept when their segment held no code.
pub const NO_REF_KEY: &str = "__NO_REF__";

/// A normalized MEL reference code such as `27-31-06A` or `21-10-01/02`.
///
/// Built through [`crate::parsing::normalize::normalize_reference`]; values
/// read back from JSON are taken as-is.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceCode(String);

impl ReferenceCode {
    pub(crate) fn from_canonical(code: String) -> Self {
        ReferenceCode(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReferenceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Operational category label found near a reference code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryTag {
    #[serde(rename = "CATI")]
    CatI,
    #[serde(rename = "CATII")]
    CatII,
    #[serde(rename = "CATIII")]
    CatIII,
    #[serde(rename = "CATIIIA")]
    CatIIIA,
    #[serde(rename = "CATIIIB")]
    CatIIIB,
    #[serde(rename = "CAT3A")]
    Cat3A,
    #[serde(rename = "CAT3B")]
    Cat3B,
    #[serde(rename = "AUTOLAND")]
    Autoland,
}

impl CategoryTag {
    /// Map a matched category phrase (`"CAT IIIA"`, `"cat3b"`, ...) to a tag.
    /// Whitespace inside the phrase is ignored.
    pub fn from_label(label: &str) -> Option<CategoryTag> {
        let compact: String = label
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();
        match compact.as_str() {
            "CATI" => Some(CategoryTag::CatI),
            "CATII" => Some(CategoryTag::CatII),
            "CATIII" => Some(CategoryTag::CatIII),
            "CATIIIA" => Some(CategoryTag::CatIIIA),
            "CATIIIB" => Some(CategoryTag::CatIIIB),
            "CAT3A" => Some(CategoryTag::Cat3A),
            "CAT3B" => Some(CategoryTag::Cat3B),
            "AUTOLAND" => Some(CategoryTag::Autoland),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryTag::CatI => "CATI",
            CategoryTag::CatII => "CATII",
            CategoryTag::CatIII => "CATIII",
            CategoryTag::CatIIIA => "CATIIIA",
            CategoryTag::CatIIIB => "CATIIIB",
            CategoryTag::Cat3A => "CAT3A",
            CategoryTag::Cat3B => "CAT3B",
            CategoryTag::Autoland => "AUTOLAND",
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// First place a reference code was seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefEntry {
    /// Page number, or line offset for line-granularity builds.
    pub page: usize,
    pub snippet: String,
}

/// First category-bearing context recorded for a code (or for `__NO_REF__`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub page: usize,
    pub cats: Vec<CategoryTag>,
    pub snippet: String,
}

/// One open MEL/CDL item from the daily maintenance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReportRow {
    /// Aircraft registration, e.g. `HA-LYG`.
    pub tail: String,
    /// Work order number.
    pub wo: String,
    /// Not reliably present in the table; always empty.
    #[serde(default)]
    pub ata: String,
    pub desc: String,
    /// Source line(s) joined with ` | `.
    pub raw: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mel_ref: Option<ReferenceCode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_label_ignores_spacing() {
        assert_eq!(CategoryTag::from_label("CAT II"), Some(CategoryTag::CatII));
        assert_eq!(CategoryTag::from_label("cat  3b"), Some(CategoryTag::Cat3B));
        assert_eq!(CategoryTag::from_label("CAT IV"), None);
    }

    #[test]
    fn test_category_serializes_as_compact_label() {
        let json = serde_json::to_string(&vec![CategoryTag::CatIIIA, CategoryTag::Autoland])
            .unwrap();
        assert_eq!(json, r#"["CATIIIA","AUTOLAND"]"#);
    }

    #[test]
    fn test_row_omits_missing_mel_ref() {
        let row = DailyReportRow {
            tail: "HA-LYG".into(),
            wo: "1234567".into(),
            ata: String::new(),
            desc: "Cabin light".into(),
            raw: "HA-LYG 1234567 Cabin light".into(),
            mel_ref: None,
        };
        let value = serde_json::to_value(&row).unwrap();
        assert!(value.get("mel_ref").is_none());
        assert_eq!(value["ata"], "");
    }
}
