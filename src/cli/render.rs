//! Render command: write one SVG per view.

use crate::cli::common::{to_json, write_output, CliError, CliResult, DesignInput};
use crate::export::svg::{render_drawing, RenderOptions, DEFAULT_SCALE};
use crate::services::{generate_bom, generate_drawing};
use clap::Args;
use std::path::PathBuf;

/// Render the drawing views as SVG
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Design input
    #[command(flatten)]
    pub input: DesignInput,

    /// Pixels per millimetre
    #[arg(short, long, default_value_t = DEFAULT_SCALE)]
    pub scale: f64,

    /// Directory for `<view>.svg` files; without it the views are printed as JSON
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> CliResult<()> {
        let options = RenderOptions::new(self.scale)
            .map_err(|e| CliError::validation(format!("Invalid --scale: {e}")))?;

        let (parsed, rules) = self.input.load()?;
        let bom = generate_bom(&parsed.design, &rules);
        let drawing = generate_drawing(&parsed.design, &bom, &rules);
        let views = render_drawing(&drawing, &options);

        match &self.out_dir {
            Some(dir) => {
                for (name, svg) in views.iter() {
                    let path = dir.join(format!("{name}.svg"));
                    write_output(Some(&path), svg)?;
                }
                eprintln!("✓ Rendered 5 views to {}", dir.display());
            }
            None => write_output(None, &to_json(&views)?)?,
        }
        Ok(())
    }
}
