use std::fs;
use std::path::Path;

use super::domain::Project;

/// Failures while exchanging case-file snapshots with the editing workflow.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("unable to read case-file snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed case-file snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Loads a consultation snapshot serialized by the editing workflow.
pub fn load_project(path: &Path) -> Result<Project, SnapshotError> {
    let raw = fs::read_to_string(path)?;
    let project = serde_json::from_str(&raw)?;
    Ok(project)
}

/// Renders a snapshot back out, pretty-printed for human diffing.
pub fn to_json(project: &Project) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(project)?)
}
