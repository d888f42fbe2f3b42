//! Per-file assembly: call-sites → one `TableDef`.

use std::collections::BTreeMap;

use gnr_dbml_core::types::{ColumnDef, ColumnKind, RelationDef, SysFields, TableDef};
use tracing::debug;

use crate::args;
use crate::brackets;
use crate::error::{Construct, ExtractError};
use crate::scan::{self, CallKind, CallSite};

/// Drops comment-only lines (leading whitespace then `#`) from a model
/// file's text.
///
/// Scanning and all error offsets operate on the filtered text, so
/// diagnostics must be rendered against this string, not the raw file.
pub fn strip_comment_lines(source: &str) -> String {
    source
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assembles one model file's text into a structured table record.
///
/// Comment-only lines are removed first; the remaining text is scanned
/// for declaration call-sites in the fixed order table → sysFields →
/// columns → relations. Column and relation order is declaration order.
///
/// # Errors
///
/// Fails on unbalanced declaration parentheses, a missing or duplicated
/// table declaration, a declaration with no recoverable name, or a
/// relation with no preceding column declaration.
pub fn assemble(source: &str) -> Result<TableDef, ExtractError> {
    let text = strip_comment_lines(source);
    let sites = scan::call_sites(&text);
    debug!(call_sites = sites.len(), "scanned model text");

    let mut table = assemble_table(&text, &sites)?;
    table.sys_fields = assemble_sys_fields(&text, &sites)?;

    if table.sys_fields.id {
        debug!(table = %table.name, "synthesizing identity column");
        table.columns.push(ColumnDef::identity());
        if table.pkey.is_none() {
            table.pkey = Some("id".to_string());
        }
    }

    // Declared columns, in textual order, with their call-site offsets
    // kept for relation-source inference. The synthesized id column has
    // no call-site and never participates in inference.
    let mut column_index: Vec<(usize, String)> = Vec::new();
    for site in &sites {
        let CallKind::Column(kind) = site.kind else {
            continue;
        };
        let column = assemble_column(&text, site, kind)?;
        column_index.push((site.start, column.name.clone()));
        table.columns.push(column);
    }

    for site in &sites {
        if site.kind != CallKind::Relation {
            continue;
        }
        let relation = assemble_relation(&text, site, &table.name, &column_index)?;
        table.relations.push(relation);
    }

    debug!(
        table = %table.name,
        columns = table.columns.len(),
        relations = table.relations.len(),
        "assembled table record"
    );
    Ok(table)
}

fn assemble_table(text: &str, sites: &[CallSite]) -> Result<TableDef, ExtractError> {
    let mut table_sites = sites.iter().filter(|s| s.kind == CallKind::Table);
    let site = table_sites
        .next()
        .ok_or(ExtractError::MissingTableDeclaration)?;
    if let Some(second) = table_sites.next() {
        return Err(ExtractError::MultipleTableDeclarations {
            offset: second.start,
        });
    }

    let attrs = parse_call(text, site, Construct::Table, Some("name"))?;
    let name = attrs.get("name").ok_or(ExtractError::MissingName {
        construct: Construct::Table,
        offset: site.start,
    })?;

    let mut table = TableDef::new(name.clone());
    table.name_long = attrs.get("name_long").cloned();
    table.pkey = attrs.get("pkey").cloned();
    Ok(table)
}

fn assemble_sys_fields(text: &str, sites: &[CallSite]) -> Result<SysFields, ExtractError> {
    // At most one sysFields call is expected; on repeats the last one
    // wins, as each successive parse overwrites the overrides.
    let mut overrides = BTreeMap::new();
    for site in sites.iter().filter(|s| s.kind == CallKind::SysFields) {
        overrides = parse_call(text, site, Construct::SysFields, None)?;
    }
    Ok(SysFields::merged(&overrides))
}

fn assemble_column(
    text: &str,
    site: &CallSite,
    kind: ColumnKind,
) -> Result<ColumnDef, ExtractError> {
    let attrs = parse_call(text, site, Construct::Column, Some("name"))?;
    let name = attrs.get("name").ok_or(ExtractError::MissingName {
        construct: Construct::Column,
        offset: site.start,
    })?;

    let mut column = ColumnDef::new(name.clone(), kind);
    column.dtype = attrs.get("dtype").cloned();
    column.size = attrs.get("size").cloned();
    column.unique = attrs.get("unique").cloned();
    column.validate_notnull = attrs.get("validate_notnull").cloned();
    column.default = attrs.get("default").cloned();
    column.name_long = attrs.get("name_long").cloned();
    Ok(column)
}

fn assemble_relation(
    text: &str,
    site: &CallSite,
    table_name: &str,
    column_index: &[(usize, String)],
) -> Result<RelationDef, ExtractError> {
    let attrs = parse_call(text, site, Construct::Relation, Some("destination"))?;
    let destination = attrs.get("destination").ok_or(ExtractError::MissingName {
        construct: Construct::Relation,
        offset: site.start,
    })?;

    let source_column = infer_source_column(column_index, site.start)
        .ok_or(ExtractError::MissingSourceColumn { offset: site.start })?;

    Ok(RelationDef::new(
        format!("{table_name}.{source_column}"),
        destination.clone(),
        attrs.contains_key("one_one"),
    ))
}

/// Positional relation-source inference: the column declared most
/// recently before `relation_offset` in the same file's text. Textual
/// position is the only link between a relation and its column, so this
/// is the one place that assumption lives.
fn infer_source_column(column_index: &[(usize, String)], relation_offset: usize) -> Option<&str> {
    column_index
        .iter()
        .take_while(|(start, _)| *start < relation_offset)
        .last()
        .map(|(_, name)| name.as_str())
}

/// Extracts a call-site's argument text and parses it into attributes.
///
/// `positional_key` recovers the leading positional argument the way the
/// notation uses it (`name` for tables and columns, `destination` for
/// relations) by prefixing the argument text before key=value parsing.
/// Calls without a meaningful positional argument (sysFields) pass
/// `None`; any leading bare argument is then dropped by the lenient
/// parser.
fn parse_call(
    text: &str,
    site: &CallSite,
    construct: Construct,
    positional_key: Option<&str>,
) -> Result<BTreeMap<String, String>, ExtractError> {
    let body = brackets::extract(text, site.paren).ok_or(ExtractError::UnbalancedBrackets {
        construct,
        offset: site.start,
    })?;

    match positional_key {
        Some(key) => Ok(args::parse(&format!("{key}={body}"))),
        None => Ok(args::parse(body)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDERS: &str = r#"
# encoding: utf-8
class Table(object):
    def config_db(self, pkg):
        tbl = pkg.table('orders', pkey='code', name_long='Orders')
        self.sysFields(tbl, id=False)
        tbl.column('code', size=':12', unique='True')
        tbl.column('total', dtype='N', validate_notnull='True').relation('items.order_id')
"#;

    #[test]
    fn assembles_table_attributes() {
        let table = assemble(ORDERS).unwrap();
        assert_eq!(table.name, "orders");
        assert_eq!(table.pkey.as_deref(), Some("code"));
        assert_eq!(table.name_long.as_deref(), Some("Orders"));
    }

    #[test]
    fn sys_fields_id_false_suppresses_identity() {
        let table = assemble(ORDERS).unwrap();
        assert!(!table.sys_fields.id);
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.columns[0].name, "code");
    }

    #[test]
    fn default_sys_fields_prepend_identity_and_pkey() {
        let table = assemble("tbl = pkg.table('orders')\ntbl.column('total')").unwrap();
        assert!(table.sys_fields.id);
        assert_eq!(table.columns[0].name, "id");
        assert_eq!(table.columns[0].dtype.as_deref(), Some("I"));
        assert_eq!(table.pkey.as_deref(), Some("id"));
    }

    #[test]
    fn explicit_pkey_not_overridden_by_identity() {
        let table = assemble("tbl = pkg.table('orders', pkey='code')\ntbl.column('code')").unwrap();
        assert_eq!(table.pkey.as_deref(), Some("code"));
        assert_eq!(table.columns[0].name, "id");
    }

    #[test]
    fn columns_keep_declaration_order() {
        let table = assemble(ORDERS).unwrap();
        let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["code", "total"]);
    }

    #[test]
    fn relation_source_is_nearest_preceding_column() {
        let table = assemble(ORDERS).unwrap();
        assert_eq!(table.relations.len(), 1);
        assert_eq!(table.relations[0].source, "orders.total");
        assert_eq!(table.relations[0].destination, "items.order_id");
        assert!(!table.relations[0].one_one);
    }

    #[test]
    fn one_one_relation_marker() {
        let source = "tbl = pkg.table('users')\n\
                      tbl.column('profile_id').relation('profiles.id', one_one='True')";
        let table = assemble(source).unwrap();
        assert!(table.relations[0].one_one);
    }

    #[test]
    fn relation_without_preceding_column_fails() {
        // A relation chained onto something that is not a column call.
        let source = "tbl = pkg.table('orders')\nfoo = (bar).relation('items.order_id')";
        let err = assemble(source).unwrap_err();
        assert!(matches!(err, ExtractError::MissingSourceColumn { .. }));
    }

    #[test]
    fn missing_table_declaration_fails() {
        let err = assemble("tbl.column('a')").unwrap_err();
        assert_eq!(err, ExtractError::MissingTableDeclaration);
    }

    #[test]
    fn multiple_table_declarations_rejected() {
        let source = "pkg.table('a')\npkg.table('b')";
        let err = assemble(source).unwrap_err();
        assert!(matches!(err, ExtractError::MultipleTableDeclarations { .. }));
    }

    #[test]
    fn unbalanced_column_brackets_fail() {
        let source = "tbl = pkg.table('orders')\ntbl.column('a', size=(12";
        let err = assemble(source).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::UnbalancedBrackets {
                construct: Construct::Column,
                ..
            }
        ));
    }

    #[test]
    fn comment_lines_dropped_before_scanning() {
        let source = "# pkg.table('commented_out')\ntbl = pkg.table('real')";
        let table = assemble(source).unwrap();
        assert_eq!(table.name, "real");
    }

    #[test]
    fn indented_comment_lines_also_dropped() {
        let source = "tbl = pkg.table('t')\n    # tbl.column('ghost')\ntbl.column('real')";
        let table = assemble(source).unwrap();
        let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["id", "real"]);
    }

    #[test]
    fn alias_and_computed_columns_tagged() {
        let source = "tbl = pkg.table('t')\n\
                      tbl.aliasColumn('short', relation_path='@other.name')\n\
                      tbl.pyColumn('derived', dtype='N')";
        let table = assemble(source).unwrap();
        assert_eq!(table.columns[1].kind, ColumnKind::Alias);
        assert_eq!(table.columns[2].kind, ColumnKind::Computed);
        assert_eq!(table.columns[2].dtype.as_deref(), Some("N"));
    }

    #[test]
    fn multiline_column_call() {
        let source = "tbl = pkg.table('t')\n\
                      tbl.column('notes',\n    dtype='T',\n    name_long='Notes')";
        let table = assemble(source).unwrap();
        let notes = table.column("notes").unwrap();
        assert_eq!(notes.name_long.as_deref(), Some("Notes"));
    }

    #[test]
    fn strip_comment_lines_keeps_code() {
        let out = strip_comment_lines("# a\nkeep\n  # b\nalso");
        assert_eq!(out, "keep\nalso");
    }

    #[test]
    fn infer_source_column_picks_greatest_preceding_offset() {
        let index = vec![(10, "a".to_string()), (50, "b".to_string())];
        assert_eq!(infer_source_column(&index, 60), Some("b"));
        assert_eq!(infer_source_column(&index, 30), Some("a"));
        assert_eq!(infer_source_column(&index, 5), None);
    }
}
