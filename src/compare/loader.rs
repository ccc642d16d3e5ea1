use crate::compare::model::SessionSummary;
use crate::error::{CompareError, Result};
use std::fs;
use std::path::Path;

pub fn load_summary(path: &Path) -> Result<SessionSummary> {
    let content = fs::read_to_string(path).map_err(|source| CompareError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content)
        .and_then(SessionSummary::from_value)
        .map_err(|source| CompareError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Loads both summaries in order, stopping at the first failure.
pub fn load_pair(path_a: &Path, path_b: &Path) -> Result<(SessionSummary, SessionSummary)> {
    let a = load_summary(path_a)?;
    let b = load_summary(path_b)?;
    Ok((a, b))
}
