use crate::conf::{OutclicksConfig, load_config};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

pub fn dump(path: PathBuf, json: bool, yaml: bool) -> anyhow::Result<()> {
    let cfg = if path.exists() {
        load_config(&path)?
    } else {
        tracing::debug!(path = %path.display(), "config file not found, dumping defaults");
        OutclicksConfig::default()
    };

    let mut stdout = io::stdout().lock();
    write_dump(&mut stdout, &cfg, json, yaml)?;
    stdout.flush()?;

    Ok(())
}

/// Writes `value` as YAML when asked, JSON otherwise.
pub fn write_dump<W: Write, T: Serialize>(
    out: &mut W,
    value: &T,
    json: bool,
    yaml: bool,
) -> anyhow::Result<()> {
    if yaml {
        dump_yaml(out, value)?;
    } else if json || !yaml {
        dump_json(out, value)?;
    }

    Ok(())
}

fn dump_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    writeln!(out, "{s}")?;
    Ok(())
}

fn dump_yaml<W: Write, T: Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
    let s = serde_yaml::to_string(value)?;
    writeln!(out, "{s}")?;
    Ok(())
}
