use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// System-field configuration merged against documented defaults.
///
/// Genropy's `sysFields` call bundles implicitly-added bookkeeping
/// columns behind named flags. Only `id` currently affects rendering
/// (it synthesizes the identity column); the remaining flags are carried
/// so embedding callers see the full effective configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SysFields {
    pub id: bool,
    pub ins: bool,
    pub upd: bool,
    pub ldel: bool,
    pub user_ins: bool,
    pub user_upd: bool,
    pub draft_field: bool,
    pub counter: Option<String>,
    pub hierarchical: Option<String>,
    pub df: bool,
}

impl Default for SysFields {
    fn default() -> Self {
        Self {
            id: true,
            ins: true,
            upd: true,
            ldel: true,
            user_ins: false,
            user_upd: false,
            draft_field: false,
            counter: None,
            hierarchical: None,
            df: false,
        }
    }
}

impl SysFields {
    /// Merges explicit declaration values over the defaults.
    ///
    /// Values arrive as quote-stripped strings; `"True"` is the only
    /// truthy spelling for boolean flags, matching the source notation.
    /// Unrecognized keys are ignored.
    pub fn merged(overrides: &BTreeMap<String, String>) -> Self {
        let mut fields = Self::default();
        for (key, value) in overrides {
            match key.as_str() {
                "id" => fields.id = as_bool(value),
                "ins" => fields.ins = as_bool(value),
                "upd" => fields.upd = as_bool(value),
                "ldel" => fields.ldel = as_bool(value),
                "user_ins" => fields.user_ins = as_bool(value),
                "user_upd" => fields.user_upd = as_bool(value),
                "draftField" => fields.draft_field = as_bool(value),
                "counter" => fields.counter = Some(value.clone()),
                "hierarchical" => fields.hierarchical = Some(value.clone()),
                "df" => fields.df = as_bool(value),
                _ => {}
            }
        }
        fields
    }
}

fn as_bool(value: &str) -> bool {
    value == "True"
}
