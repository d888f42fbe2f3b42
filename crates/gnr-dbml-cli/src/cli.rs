use std::path::PathBuf;

use clap::Parser;

/// Generate a DBML entity-relationship diagram from Genropy model files.
///
/// Reads every `*.py` file under `<PROJECT_ROOT>/model/`, extracts the
/// table, sysFields, column, and relation declarations, and writes one
/// DBML document to standard output.
#[derive(Parser)]
#[command(
    name = "gnr-dbml",
    version,
    about = "Generate a DBML diagram from Genropy model declarations",
    after_help = "The DBML document is written to stdout; status and \
                  diagnostics go to stderr."
)]
pub struct Cli {
    /// Project root containing the model/ directory
    pub root: PathBuf,

    /// Skip files that fail to extract (with a warning) instead of
    /// aborting the whole run
    #[arg(short = 'k', long = "keep-going")]
    pub keep_going: bool,

    /// Suppress status output on stderr
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Disable colored output [env: NO_COLOR]
    #[arg(long = "no-color", env = "NO_COLOR")]
    pub no_color: bool,
}
