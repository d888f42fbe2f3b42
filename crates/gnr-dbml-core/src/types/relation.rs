use serde::{Deserialize, Serialize};

/// A relation extracted from a `).relation(` call-site.
///
/// `source` is a `table.column` reference inferred positionally from the
/// nearest preceding column declaration; `destination` is the target
/// string exactly as written in the declaration. No cross-file resolution
/// is performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationDef {
    pub source: String,
    pub destination: String,
    /// True when the declaration carried a `one_one` parameter; such
    /// relations render with the `-` connector instead of `>`.
    #[serde(default)]
    pub one_one: bool,
}

impl RelationDef {
    pub fn new(source: impl Into<String>, destination: impl Into<String>, one_one: bool) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            one_one,
        }
    }

    /// The DBML reference operator: `-` for one-to-one, `>` for the
    /// many-to-one default.
    pub fn operator(&self) -> &'static str {
        if self.one_one {
            "-"
        } else {
            ">"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn many_to_one_is_default() {
        let rel = RelationDef::new("orders.total", "items.order_id", false);
        assert_eq!(rel.operator(), ">");
    }

    #[test]
    fn one_one_uses_dash() {
        let rel = RelationDef::new("users.profile_id", "profiles.id", true);
        assert_eq!(rel.operator(), "-");
    }

    #[test]
    fn serde_roundtrip() {
        let rel = RelationDef::new("a.b", "c.d", true);
        let json = serde_json::to_string(&rel).unwrap();
        let back: RelationDef = serde_json::from_str(&json).unwrap();
        assert_eq!(rel, back);
    }
}
