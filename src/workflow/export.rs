//! Export of workflow documents as downloadable JSON artifacts.

use crate::error::ExportError;
use crate::workflow::Workflow;
use std::fs;
use std::path::{Path, PathBuf};

/// Serializes a workflow to the pretty-printed export representation.
pub fn to_pretty_json(workflow: &Workflow) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(workflow)?)
}

/// The artifact file name for a workflow: `<name>.json`.
pub fn file_name(workflow: &Workflow) -> String {
    format!("{}.json", workflow.name)
}

/// Writes the export artifact into a directory and returns its full path.
pub fn save_to_dir(workflow: &Workflow, dir: &Path) -> Result<PathBuf, ExportError> {
    let json = to_pretty_json(workflow)?;
    let path = dir.join(file_name(workflow));
    fs::write(&path, json).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(path)
}
