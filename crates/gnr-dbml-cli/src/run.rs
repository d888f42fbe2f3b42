use std::path::{Path, PathBuf};

use gnr_dbml_core::types::TableDef;
use gnr_dbml_extract::{assemble, render_all, strip_comment_lines};

use crate::cli::Cli;
use crate::diagnostic::render_diagnostic;
use crate::error::CliError;
use crate::output::OutputContext;

/// Run the conversion: discover model files, assemble each into a table
/// record, then render the whole DBML document to stdout.
///
/// Assembly is completed for every file before anything is printed, so a
/// failing file never produces partial output. By default the first
/// failure aborts the run; with `--keep-going` the file is skipped with
/// a warning instead.
pub fn run(cli: &Cli, output: &OutputContext) -> Result<(), CliError> {
    let files = discover_model_files(&cli.root)?;

    let mut tables: Vec<TableDef> = Vec::new();
    let mut skipped = 0usize;

    for file in &files {
        let source = std::fs::read_to_string(file).map_err(|e| CliError::Io {
            path: file.clone(),
            source: e,
        })?;

        match assemble(&source) {
            Ok(table) => {
                output.status(&format!("  {} .... table {}", file.display(), table.name));
                tables.push(table);
            }
            Err(err) => {
                // Diagnostic spans refer to the comment-filtered text.
                let filtered = strip_comment_lines(&source);
                let report = render_diagnostic(&err, &filtered, &file.display().to_string());
                eprintln!("{report:?}");

                if cli.keep_going {
                    skipped += 1;
                    output.warn(&format!("skipping {}: {err}", file.display()));
                } else {
                    return Err(CliError::Extract {
                        file: file.clone(),
                        source: err,
                    });
                }
            }
        }
    }

    let document = render_all(&tables);
    println!("{document}");

    if skipped > 0 {
        output.warn(&format!(
            "{} tables from {} files ({skipped} skipped)",
            tables.len(),
            files.len()
        ));
    } else {
        output.success(&format!(
            "{} tables from {} files",
            tables.len(),
            files.len()
        ));
    }
    Ok(())
}

/// Discover model files: every `*.py` entry directly under
/// `<root>/model/`, sorted for a deterministic enumeration order.
fn discover_model_files(root: &Path) -> Result<Vec<PathBuf>, CliError> {
    let model_dir = root.join("model");
    let pattern = format!("{}/*.py", model_dir.display());

    let entries = glob::glob(&pattern).map_err(|e| CliError::Other(e.to_string()))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CliError::Other(e.to_string()))?;
        if entry.is_file() {
            files.push(entry);
        }
    }

    if files.is_empty() {
        return Err(CliError::NoModelFiles { path: model_dir });
    }

    files.sort();
    Ok(files)
}
