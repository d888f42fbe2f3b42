use std::path::PathBuf;

use gnr_dbml_extract::ExtractError;

/// Exit codes for the CLI process.
///
/// - 0: success
/// - 1: general error (IO and friends)
/// - 2: invalid input location (no model files)
/// - 3: extraction error in a model file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArguments = 2,
    ExtractError = 3,
}

/// Errors returned by the CLI pipeline.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A model file failed extraction (the detailed diagnostic has
    /// already been rendered to stderr).
    #[error("extraction failed in {file}")]
    Extract {
        file: PathBuf,
        #[source]
        source: ExtractError,
    },

    /// IO errors (file not found, permission denied).
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The project root has no model files to convert.
    #[error("no model files found in {path}")]
    NoModelFiles { path: PathBuf },

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Maps this error to the appropriate exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Extract { .. } => ExitCode::ExtractError,
            Self::NoModelFiles { .. } => ExitCode::InvalidArguments,
            Self::Io { .. } | Self::Other(_) => ExitCode::GeneralError,
        }
    }
}
