//! CabinetDraft - bill of materials and drawings for built-in cabinets
//!
//! Reads a structured cabinet design and produces a parts list, drawing
//! coordinates or rendered SVG views. Construction rules come from the rule
//! document in the config directory unless `--rules` points elsewhere.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cabinetdraft::cli::{BomArgs, CliResult, DrawingArgs, RenderArgs, RulesArgs};
use cabinetdraft::constants::APP_BINARY_NAME;

/// CabinetDraft - cabinet BOM and drawing generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, name = APP_BINARY_NAME)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a bill of materials
    Bom(BomArgs),
    /// Generate drawing coordinates as JSON
    Drawing(DrawingArgs),
    /// Render drawing views as SVG
    Render(RenderArgs),
    /// Inspect or reset the construction rules
    Rules(RulesArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Bom(args) => args.execute(),
            Self::Drawing(args) => args.execute(),
            Self::Render(args) => args.execute(),
            Self::Rules(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays machine-readable
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code.code());
    }
}
