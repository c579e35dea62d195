use crate::conf::error::ConfigError;
use crate::conf::types::OutclicksConfig;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "outclicks.hcl";

/// Reads and parses one HCL config file. Missing sections fall back to defaults.
pub fn load_config(path: &Path) -> Result<OutclicksConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))
}

/// Picks the config to run with.
///
/// An explicit path must exist. Without one, `outclicks.hcl` in `dir` is used
/// when present, otherwise the built-in defaults. Returns the file actually
/// loaded, if any.
pub fn resolve_config(
    explicit: Option<&Path>,
    dir: &Path,
) -> Result<(OutclicksConfig, Option<PathBuf>), ConfigError> {
    if let Some(path) = explicit {
        return Ok((load_config(path)?, Some(path.to_path_buf())));
    }

    let candidate = dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        let cfg = load_config(&candidate)?;
        return Ok((cfg, Some(candidate)));
    }

    tracing::debug!("no {CONFIG_FILE_NAME} found, using defaults");
    Ok((OutclicksConfig::default(), None))
}
