use crate::conf::{ConfigError, load_config, validate_config};
use miette::Report;
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool, json: bool) -> anyhow::Result<()> {
    let cfg = match load_config(&path) {
        Ok(cfg) => cfg,
        Err(err) => {
            print_config_error(err, plain);
            anyhow::bail!("configuration could not be loaded");
        }
    };

    let report = validate_config(&cfg);

    if json {
        println!("{}", report.render_json()?);
    } else if plain {
        print!("{}", report.render_plain());
    } else {
        print!("{}", report.render_pretty());
    }

    if report.has_errors() {
        anyhow::bail!("configuration is invalid");
    }

    if !json {
        println!("✔ Config loaded successfully");
        println!("✔ log file: {}", cfg.analysis.log_file.display());
        println!("✔ exit prefix: {}", cfg.analysis.exit_prefix);
        println!("✔ error budget: {}", cfg.analysis.error_budget);
        println!("✔ {} warnings", report.warnings.len());
    }

    Ok(())
}

fn print_config_error(err: ConfigError, plain: bool) {
    if plain {
        eprintln!("{}", err);
    } else {
        eprintln!();
        eprintln!("{:?}", Report::new(err));
    }
}
