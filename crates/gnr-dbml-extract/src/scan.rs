//! Call-site scanner over the fixed declaration markers.
//!
//! Model files are otherwise free-form host-language text; only the known
//! call markers are recognized, everything else is skipped. Each site
//! records its start offset (used for positional relation-source
//! inference) and the offset of its argument-list `(` (handed to the
//! bracket extractor).

use gnr_dbml_core::types::ColumnKind;

/// The declaration kind a call-site belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CallKind {
    Table,
    SysFields,
    Column(ColumnKind),
    Relation,
}

/// One recognized declaration call-site in the filtered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CallSite {
    pub kind: CallKind,
    /// Byte offset where the marker begins.
    pub start: usize,
    /// Byte offset of the argument-list opening parenthesis.
    pub paren: usize,
}

/// A table declaration is a module-level `pkg.table(` call; the other
/// markers are method calls on the table builder, so they begin at a dot
/// (or, for relations, at the closing parenthesis they chain onto).
const TABLE_MARKER: &str = "pkg.table(";
const SYS_FIELDS_MARKER: &str = ".sysFields(";
const RELATION_MARKER: &str = ").relation(";

/// Finds every recognized call-site, in textual order.
pub(crate) fn call_sites(text: &str) -> Vec<CallSite> {
    let mut sites = Vec::new();

    push_sites(&mut sites, text, TABLE_MARKER, CallKind::Table);
    push_sites(&mut sites, text, SYS_FIELDS_MARKER, CallKind::SysFields);
    push_sites(&mut sites, text, RELATION_MARKER, CallKind::Relation);
    for kind in [
        ColumnKind::Plain,
        ColumnKind::Alias,
        ColumnKind::Formula,
        ColumnKind::Computed,
    ] {
        let marker = format!(".{}(", kind.marker());
        push_sites(&mut sites, text, &marker, CallKind::Column(kind));
    }

    sites.sort_by_key(|site| site.start);
    sites
}

fn push_sites(sites: &mut Vec<CallSite>, text: &str, marker: &str, kind: CallKind) {
    for (start, _) in text.match_indices(marker) {
        sites.push(CallSite {
            kind,
            start,
            // The marker ends with '('.
            paren: start + marker.len() - 1,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_table_site() {
        let sites = call_sites("tbl = pkg.table('orders', pkey='id')");
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].kind, CallKind::Table);
        assert_eq!(sites[0].start, 6);
        assert_eq!(&"tbl = pkg.table('orders', pkey='id')"[sites[0].paren..][..1], "(");
    }

    #[test]
    fn finds_all_column_forms() {
        let text = "tbl.column('a')\n\
                    tbl.aliasColumn('b')\n\
                    tbl.formulaColumn('c')\n\
                    tbl.pyColumn('d')";
        let sites = call_sites(text);
        let kinds: Vec<CallKind> = sites.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                CallKind::Column(ColumnKind::Plain),
                CallKind::Column(ColumnKind::Alias),
                CallKind::Column(ColumnKind::Formula),
                CallKind::Column(ColumnKind::Computed),
            ]
        );
    }

    #[test]
    fn relation_chains_after_column_close() {
        let text = "tbl.column('total').relation('items.order_id')";
        let sites = call_sites(text);
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].kind, CallKind::Column(ColumnKind::Plain));
        assert_eq!(sites[1].kind, CallKind::Relation);
        assert!(sites[0].start < sites[1].start);
    }

    #[test]
    fn textual_order_across_kinds() {
        let text = "pkg.table('t')\nself.sysFields(tbl)\ntbl.column('x')";
        let sites = call_sites(text);
        assert_eq!(sites[0].kind, CallKind::Table);
        assert_eq!(sites[1].kind, CallKind::SysFields);
        assert_eq!(sites[2].kind, CallKind::Column(ColumnKind::Plain));
    }

    #[test]
    fn unrelated_calls_ignored() {
        let sites = call_sites("print(len(rows))\nvalue = compute(a, b)");
        assert!(sites.is_empty());
    }

    #[test]
    fn bare_relation_without_chain_ignored() {
        // The relation marker requires the ')' it chains onto.
        let sites = call_sites("x.relation('a.b')");
        assert!(sites.is_empty());
    }
}
