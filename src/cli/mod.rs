//! CLI command handlers for CabinetDraft.
//!
//! This module provides headless, scriptable access to the generators for
//! automation and CI integration.

pub mod bom;
pub mod common;
pub mod drawing;
pub mod render;
pub mod rules;

// Re-export types used by main.rs and tests
pub use bom::{BomArgs, BomFormat};
pub use common::{CliError, CliResult, ExitCode};
pub use drawing::DrawingArgs;
pub use render::RenderArgs;
pub use rules::RulesArgs;
