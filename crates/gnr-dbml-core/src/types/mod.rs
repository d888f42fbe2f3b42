//! Structured records assembled from model-file declarations.

mod column;
mod column_kind;
mod relation;
mod sys_fields;
mod table;

pub use column::ColumnDef;
pub use column_kind::ColumnKind;
pub use relation::RelationDef;
pub use sys_fields::SysFields;
pub use table::TableDef;
