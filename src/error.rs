use std::path::PathBuf;

use thiserror::Error;

/// Every way a single extraction run can fail. All of them are terminal.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("unsupported file type: {}. Use .docx or .pdf", .0.display())]
    UnsupportedFileType(PathBuf),

    #[error("{format} support is not available in this build. Please {hint}")]
    MissingDependency {
        format: &'static str,
        hint: &'static str,
    },

    #[error("no entries found in the document")]
    NoEntriesFound,

    #[error("could not parse document: {0}")]
    FileFormat(String),

    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}
