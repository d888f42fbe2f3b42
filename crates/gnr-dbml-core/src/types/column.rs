use serde::{Deserialize, Serialize};

use super::column_kind::ColumnKind;

/// A single column extracted from a declaration call-site.
///
/// Attribute values keep the raw string form found in the source after
/// quote stripping; in particular `unique` and `validate_notnull` hold
/// boolean-as-string values where `"True"` is the only truthy spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    pub kind: ColumnKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dtype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validate_notnull: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_long: Option<String>,
}

impl ColumnDef {
    /// Creates a column with only a name and kind; attributes default to absent.
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
            dtype: None,
            size: None,
            unique: None,
            validate_notnull: None,
            default: None,
            name_long: None,
        }
    }

    /// The synthesized identity column prepended when the effective
    /// `id` system-field flag is true: `id Integer(22)`, unique, not null.
    pub fn identity() -> Self {
        Self {
            name: "id".to_string(),
            kind: ColumnKind::Plain,
            dtype: Some("I".to_string()),
            size: Some("22".to_string()),
            unique: Some("True".to_string()),
            validate_notnull: Some("True".to_string()),
            default: None,
            name_long: None,
        }
    }

    /// Returns true if the `unique` attribute is the string `"True"`.
    pub fn is_unique(&self) -> bool {
        self.unique.as_deref() == Some("True")
    }

    /// Returns true if the `validate_notnull` attribute is the string `"True"`.
    pub fn is_notnull(&self) -> bool {
        self.validate_notnull.as_deref() == Some("True")
    }

    /// The `size` attribute with colon characters stripped, as rendered.
    pub fn display_size(&self) -> Option<String> {
        self.size.as_ref().map(|s| s.replace(':', ""))
    }
}
