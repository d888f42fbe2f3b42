use std::fmt;

use serde::{Deserialize, Serialize};

/// Which of the four column-declaration forms produced a column.
///
/// Informational only: the tag is never rendered into DBML, but it is
/// preserved so embedding callers can distinguish stored fields from
/// derived ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ColumnKind {
    /// A plain stored column: `.column(`.
    Plain,
    /// A renamed reference to another column: `.aliasColumn(`.
    Alias,
    /// A derived SQL expression: `.formulaColumn(`.
    Formula,
    /// A value computed in host code: `.pyColumn(`.
    Computed,
}

impl ColumnKind {
    /// The call marker that declares this kind, without the leading dot
    /// or the argument parenthesis.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Plain => "column",
            Self::Alias => "aliasColumn",
            Self::Formula => "formulaColumn",
            Self::Computed => "pyColumn",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}
