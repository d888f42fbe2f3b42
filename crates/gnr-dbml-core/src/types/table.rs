use serde::{Deserialize, Serialize};

use super::column::ColumnDef;
use super::relation::RelationDef;
use super::sys_fields::SysFields;

/// One structured table record, assembled from a single model file.
///
/// Column and relation order is declaration order in the source text and
/// is preserved verbatim through rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_long: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pkey: Option<String>,
    pub sys_fields: SysFields,
    pub columns: Vec<ColumnDef>,
    pub relations: Vec<RelationDef>,
}

impl TableDef {
    /// Creates an empty table record with default system fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            name_long: None,
            pkey: None,
            sys_fields: SysFields::default(),
            columns: Vec::new(),
            relations: Vec::new(),
        }
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns true if `column` is this table's designated primary key.
    pub fn is_pkey(&self, column: &ColumnDef) -> bool {
        self.pkey.as_deref() == Some(column.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColumnKind;

    #[test]
    fn new_table_is_empty() {
        let table = TableDef::new("orders");
        assert_eq!(table.name, "orders");
        assert!(table.columns.is_empty());
        assert!(table.relations.is_empty());
        assert_eq!(table.sys_fields, SysFields::default());
    }

    #[test]
    fn column_lookup() {
        let mut table = TableDef::new("orders");
        table.columns.push(ColumnDef::new("total", ColumnKind::Plain));
        assert!(table.column("total").is_some());
        assert!(table.column("missing").is_none());
    }

    #[test]
    fn pkey_match() {
        let mut table = TableDef::new("orders");
        table.pkey = Some("id".to_string());
        let id = ColumnDef::identity();
        let other = ColumnDef::new("total", ColumnKind::Plain);
        assert!(table.is_pkey(&id));
        assert!(!table.is_pkey(&other));
    }

    #[test]
    fn serde_roundtrip() {
        let mut table = TableDef::new("orders");
        table.columns.push(ColumnDef::identity());
        table.relations.push(RelationDef::new(
            "orders.total",
            "items.order_id",
            false,
        ));
        let json = serde_json::to_string(&table).unwrap();
        let back: TableDef = serde_json::from_str(&json).unwrap();
        assert_eq!(table, back);
    }
}
