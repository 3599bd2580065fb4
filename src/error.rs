use rust_xlsxwriter::XlsxError;
use std::path::PathBuf;
use thiserror::Error;

pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON file. Please upload a valid JSON file.";
pub const READ_FAILED_MESSAGE: &str = "Could not read the selected file.";
pub const CONVERT_FAILED_MESSAGE: &str = "An error occurred while converting data to Excel.";

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("xlsx error: {0}")]
    Xlsx(#[from] XlsxError),

    #[error("too many phone numbers for one worksheet: {count}")]
    TooManyRows { count: usize },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("background worker failed: {0}")]
    Worker(String),
}

impl ConvertError {
    /// Text shown in the window. The `Display` form carries the details and
    /// only goes to the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            ConvertError::Parse(_) => INVALID_JSON_MESSAGE,
            ConvertError::Read { .. } => READ_FAILED_MESSAGE,
            ConvertError::Xlsx(_)
            | ConvertError::TooManyRows { .. }
            | ConvertError::Write { .. }
            | ConvertError::Worker(_) => CONVERT_FAILED_MESSAGE,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
