use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not write comparison JSON to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON Serialize Error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CompareError {
    pub fn display_localized(&self) -> String {
        match self {
            CompareError::Read { path, source } => t!(
                "errors.read_failed",
                path = path.display(),
                error = source
            )
            .to_string(),
            CompareError::Parse { path, source } => t!(
                "errors.parse_failed",
                path = path.display(),
                error = source
            )
            .to_string(),
            CompareError::Write { path, source } => t!(
                "errors.write_failed",
                path = path.display(),
                error = source
            )
            .to_string(),
            CompareError::Serialize(source) => {
                t!("errors.serialize_failed", error = source).to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CompareError>;
