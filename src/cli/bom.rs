//! BOM command: generate a bill of materials from a design file.

use crate::cli::common::{to_json, write_output, CliResult, DesignInput};
use crate::export::generate_bom_table;
use crate::services::generate_bom;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Output format of the BOM command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BomFormat {
    /// `BomResult` JSON
    #[default]
    Json,
    /// Markdown parts list
    Markdown,
}

/// Generate a bill of materials
#[derive(Debug, Clone, Args)]
pub struct BomArgs {
    /// Design input
    #[command(flatten)]
    pub input: DesignInput,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = BomFormat::Json)]
    pub format: BomFormat,

    /// Write to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl BomArgs {
    /// Execute the bom command
    pub fn execute(&self) -> CliResult<()> {
        let (parsed, rules) = self.input.load()?;
        let bom = generate_bom(&parsed.design, &rules);

        let content = match self.format {
            BomFormat::Json => to_json(&bom)?,
            BomFormat::Markdown => generate_bom_table(&bom),
        };
        write_output(self.output.as_deref(), &content)?;

        if let Some(path) = &self.output {
            eprintln!(
                "✓ {} items, {} sheets written to {}",
                bom.summary.total_items,
                bom.summary.estimated_sheets,
                path.display()
            );
        }
        Ok(())
    }
}
