//! Drawing command: generate drawing coordinates from a design file.

use crate::cli::common::{to_json, write_output, CliResult, DesignInput};
use crate::services::{generate_bom, generate_drawing};
use clap::Args;
use std::path::PathBuf;

/// Generate drawing coordinates as JSON
#[derive(Debug, Clone, Args)]
pub struct DrawingArgs {
    /// Design input
    #[command(flatten)]
    pub input: DesignInput,

    /// Write to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl DrawingArgs {
    /// Execute the drawing command
    pub fn execute(&self) -> CliResult<()> {
        let (parsed, rules) = self.input.load()?;
        let bom = generate_bom(&parsed.design, &rules);
        let drawing = generate_drawing(&parsed.design, &bom, &rules);

        write_output(self.output.as_deref(), &to_json(&drawing)?)?;
        if let Some(path) = &self.output {
            eprintln!("✓ Drawing written to {}", path.display());
        }
        Ok(())
    }
}
