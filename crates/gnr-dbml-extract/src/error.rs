use std::fmt;

/// The declaration construct being parsed when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    Table,
    SysFields,
    Column,
    Relation,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::SysFields => write!(f, "sysFields"),
            Self::Column => write!(f, "column"),
            Self::Relation => write!(f, "relation"),
        }
    }
}

/// Errors that occur while extracting declarations from a model file.
///
/// Offsets are byte offsets into the comment-filtered text (comment-only
/// lines are dropped before scanning), not the raw file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExtractError {
    /// A declaration's parentheses never returned to depth zero.
    UnbalancedBrackets { construct: Construct, offset: usize },

    /// No table declaration call-site was found in the file.
    MissingTableDeclaration,

    /// A second table declaration was found; one table per file is the
    /// supported policy.
    MultipleTableDeclarations { offset: usize },

    /// A declaration parsed, but its required name (or destination, for
    /// relations) argument was not recoverable.
    MissingName { construct: Construct, offset: usize },

    /// A relation call-site has no preceding column declaration to
    /// serve as its source.
    MissingSourceColumn { offset: usize },
}

impl ExtractError {
    /// Byte offset of the offending call-site in the filtered text, when known.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::UnbalancedBrackets { offset, .. }
            | Self::MultipleTableDeclarations { offset }
            | Self::MissingName { offset, .. }
            | Self::MissingSourceColumn { offset } => Some(*offset),
            Self::MissingTableDeclaration => None,
        }
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnbalancedBrackets { construct, offset } => {
                write!(
                    f,
                    "unbalanced parentheses in {construct} declaration at offset {offset}"
                )
            }
            Self::MissingTableDeclaration => {
                write!(f, "no table declaration found (expected a pkg.table( call)")
            }
            Self::MultipleTableDeclarations { offset } => {
                write!(
                    f,
                    "multiple table declarations in one file (second at offset {offset})"
                )
            }
            Self::MissingName { construct, offset } => {
                write!(
                    f,
                    "{construct} declaration at offset {offset} has no usable name argument"
                )
            }
            Self::MissingSourceColumn { offset } => {
                write!(
                    f,
                    "relation at offset {offset} has no preceding column declaration"
                )
            }
        }
    }
}

impl std::error::Error for ExtractError {}
