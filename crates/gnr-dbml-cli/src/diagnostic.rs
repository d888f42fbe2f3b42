use gnr_dbml_extract::{Construct, ExtractError};
use miette::{Diagnostic, NamedSource, SourceSpan};

/// A diagnostic wrapping an `ExtractError` for rich miette rendering.
///
/// Spans point into the comment-filtered model text (comment-only lines
/// are dropped before scanning), so callers pass the filtered source,
/// not the raw file.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ModelDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{label}")]
    span: SourceSpan,

    message: String,
    label: String,

    #[help]
    suggestion: Option<String>,
}

/// Convert an `ExtractError` into a miette `ModelDiagnostic`.
pub fn extract_error_to_diagnostic(
    error: &ExtractError,
    source: &str,
    filename: &str,
) -> ModelDiagnostic {
    let named_src = NamedSource::new(filename, source.to_string());

    match error {
        ExtractError::UnbalancedBrackets { construct, offset } => ModelDiagnostic {
            src: named_src,
            span: (*offset, 1).into(),
            message: format!("unbalanced parentheses in {construct} declaration"),
            label: "declaration opens here".to_string(),
            suggestion: Some("Check that every '(' has a matching ')'.".to_string()),
        },

        ExtractError::MissingTableDeclaration => ModelDiagnostic {
            src: named_src,
            span: (0, 0).into(),
            message: "no table declaration found".to_string(),
            label: "expected a pkg.table( call in this file".to_string(),
            suggestion: Some("Add a pkg.table('table_name', ...) declaration.".to_string()),
        },

        ExtractError::MultipleTableDeclarations { offset } => ModelDiagnostic {
            src: named_src,
            span: (*offset, 1).into(),
            message: "multiple table declarations in one file".to_string(),
            label: "second declaration here".to_string(),
            suggestion: Some("Move each table declaration into its own model file.".to_string()),
        },

        ExtractError::MissingName { construct, offset } => ModelDiagnostic {
            src: named_src,
            span: (*offset, 1).into(),
            message: format!("{construct} declaration has no usable name argument"),
            label: "name not recoverable".to_string(),
            suggestion: match construct {
                Construct::Relation => {
                    Some("Pass the destination as the first positional argument.".to_string())
                }
                _ => Some("Pass the name as the first positional argument.".to_string()),
            },
        },

        ExtractError::MissingSourceColumn { offset } => ModelDiagnostic {
            src: named_src,
            span: (*offset, 1).into(),
            message: "relation has no preceding column declaration".to_string(),
            label: "no column declared before this relation".to_string(),
            suggestion: Some(
                "Chain .relation(...) directly after the column it belongs to.".to_string(),
            ),
        },

        // Catch future non_exhaustive variants
        _ => ModelDiagnostic {
            src: named_src,
            span: (0, 0).into(),
            message: error.to_string(),
            label: "error".to_string(),
            suggestion: None,
        },
    }
}

/// Render an extraction error for a file as a miette report.
pub fn render_diagnostic(error: &ExtractError, source: &str, filename: &str) -> miette::Report {
    miette::Report::new(extract_error_to_diagnostic(error, source, filename))
}
