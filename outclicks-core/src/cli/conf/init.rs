use crate::conf::CONFIG_FILE_NAME;
use anyhow::{Context, Result, bail};
use rust_embed::RustEmbed;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "config-templates/"]
pub struct ConfigTemplates;

pub fn init(dir: PathBuf) -> Result<()> {
    if dir.is_file() {
        bail!("{} exists and is not a directory", dir.display());
    }

    let target = dir.join(CONFIG_FILE_NAME);

    // Refuse to overwrite an existing config
    if target.exists() {
        bail!("{} already exists", target.display());
    }

    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    write_file(&target, &template(CONFIG_FILE_NAME)?)?;

    println!("✔ Initialized outclicks config at {}", target.display());
    println!();
    println!("Next steps:");
    println!("  outclicks config check {}", target.display());
    println!("  outclicks stats --config {}", target.display());

    Ok(())
}

/// Fetch an embedded config template as UTF-8 text
fn template(path: &str) -> Result<String> {
    let file = ConfigTemplates::get(path)
        .with_context(|| format!("missing embedded config template: {path}"))?;

    let s =
        std::str::from_utf8(file.data.as_ref()).context("config template is not valid UTF-8")?;

    Ok(s.to_owned())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    let mut f =
        fs::File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    f.write_all(contents.trim_start().as_bytes())?;
    Ok(())
}
