mod check;
mod dump;
mod init;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
pub use init::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to the config file
        #[arg(default_value = "outclicks.hcl")]
        path: PathBuf,

        /// Print issues without colors or diagnostics
        #[arg(short, long, default_value = "false")]
        plain: bool,

        /// Print issues as JSON
        #[arg(long, conflicts_with = "plain")]
        json: bool,
    },

    /// Print resolved configuration
    Dump {
        /// Path to the config file (defaults apply when it does not exist)
        #[arg(default_value = "outclicks.hcl")]
        path: PathBuf,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Write a starter config file
    Init {
        /// Directory to write outclicks.hcl into
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path, plain, json } => check(path, plain, json),
        ConfigCmd::Dump { path, json, yaml } => dump(path, json, yaml),
        ConfigCmd::Init { dir } => init(dir),
    }
}
