//! DBML rendering of assembled table records.

use gnr_dbml_core::dtype;
use gnr_dbml_core::types::{ColumnDef, RelationDef, TableDef};

const INDENT: &str = "    ";

/// Renders a list of table records into one DBML document.
///
/// Pure function, no I/O. Tables, columns, and relations are emitted
/// strictly in input order; the renderer never reorders anything.
pub fn render_all(tables: &[TableDef]) -> String {
    let mut output = String::new();
    for table in tables {
        output.push_str(&render(table));
    }
    output
}

/// Renders one table block followed by its reference lines.
pub fn render(table: &TableDef) -> String {
    let mut output = String::new();

    output.push_str("Table ");
    output.push_str(&table.name);
    output.push_str("{\n");

    for column in &table.columns {
        render_column(table, column, &mut output);
    }

    if let Some(name_long) = &table.name_long {
        output.push('\n');
        output.push_str(INDENT);
        output.push_str(&format!("Note: '{name_long}'\n"));
    }

    output.push_str("}\n\n");

    for relation in &table.relations {
        render_relation(relation, &mut output);
    }
    output.push('\n');

    output
}

fn render_column(table: &TableDef, column: &ColumnDef, output: &mut String) {
    output.push_str(INDENT);
    output.push_str(&column.name);
    output.push(' ');
    output.push_str(&dtype::translate(column.dtype.as_deref()));

    if let Some(size) = column.display_size() {
        output.push_str(&format!("({size})"));
    }

    // Attribute order is fixed: pk, unique, not null, default, note.
    // The bracket list is always emitted, possibly empty.
    let mut attrs: Vec<String> = Vec::new();
    if table.is_pkey(column) {
        attrs.push("pk".to_string());
    }
    if column.is_unique() {
        attrs.push("unique".to_string());
    }
    if column.is_notnull() {
        attrs.push("not null".to_string());
    }
    if let Some(default) = &column.default {
        attrs.push(format!("default: {default}"));
    }
    if let Some(name_long) = &column.name_long {
        attrs.push(format!("note: '{name_long}'"));
    }

    output.push_str(" [");
    output.push_str(&attrs.join(","));
    output.push_str("]\n");
}

fn render_relation(relation: &RelationDef, output: &mut String) {
    output.push_str(&format!(
        "Ref: {} {} {}\n",
        relation.source,
        relation.operator(),
        relation.destination
    ));
}
