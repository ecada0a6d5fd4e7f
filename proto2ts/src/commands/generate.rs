use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{UnwrapOrExit, load_config};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the JSON schema descriptor
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Path to proto2ts.toml (defaults to the nearest one above the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory (overrides output_path from the config)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Remove the output directory before writing
    #[arg(long)]
    pub clean: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let (mut config, _) = load_config(self.config.as_deref())?;
        if let Some(output) = &self.output {
            config.output_path = output.clone();
            config.validate().unwrap_or_exit();
        }

        let report = ops::generate(
            &config,
            GenerateOptions {
                schema: &self.schema,
                clean: self.clean,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
