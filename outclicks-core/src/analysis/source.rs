use crate::analysis::error::AnalysisError;
use std::fs;
use std::path::Path;

/// Reads the whole log into memory, one entry per line.
///
/// Invalid UTF-8 is replaced rather than rejected; such lines usually fail the
/// grammar later and are charged to the error budget like any other bad line.
pub fn load_lines(path: &Path) -> Result<Vec<String>, AnalysisError> {
    let bytes = fs::read(path).map_err(|source| AnalysisError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let lines: Vec<String> = String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_owned)
        .collect();

    tracing::info!(path = %path.display(), lines = lines.len(), "log file loaded");

    Ok(lines)
}
