use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::load_config;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to proto2ts.toml (defaults to the nearest one above the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also load a JSON schema descriptor and list the types it declares
    #[arg(short, long)]
    pub schema: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let (config, path) = load_config(self.config.as_deref())?;
        let report = ops::check(&config, path.as_deref(), self.schema.as_deref())?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
