mod check;
mod generate;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{Parser, Subcommand};
use eyre::{Context, Result};
use generate::GenerateCommand;
use proto2ts_config::{Config, find_config_file};

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for proto2ts_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load the config at `explicit`, or the nearest proto2ts.toml above the
/// current directory. Returns the defaults when there is none.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<(Config, Option<PathBuf>)> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let cwd = std::env::current_dir().wrap_err("Failed to read current directory")?;
            find_config_file(cwd)
        }
    };

    let config = match &path {
        Some(path) => Config::from_file(path).unwrap_or_exit(),
        None => {
            tracing::debug!("no proto2ts.toml found, using defaults");
            Config::default()
        }
    };
    Ok((config, path))
}

#[derive(Parser)]
#[command(name = "proto2ts")]
#[command(version)]
#[command(about = "Generate TypeScript type declarations from protobuf schemas")]
pub(crate) struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeScript declarations from a schema descriptor
    Generate(GenerateCommand),

    /// Validate proto2ts.toml and list the types that would be generated
    Check(CheckCommand),
}
