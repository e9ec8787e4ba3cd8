//! Shared CLI plumbing: error type, exit codes and the options every
//! generating command accepts.

use crate::constants::CONFIG_DIR_ENV;
use crate::parser::{load_design, parse_design_str, ParsedDesign};
use crate::rules::{RuleStore, Rules};
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input was rejected
    ValidationError = 1,
    /// A file could not be read or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Rejected input (bad option value, malformed design).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Filesystem failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of CLI handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Rule document selection.
#[derive(Debug, Clone, Default, Args)]
pub struct RulesOptions {
    /// Rule document to use instead of the one in the config directory
    #[arg(long, value_name = "FILE", global = true)]
    pub rules: Option<PathBuf>,
}

impl RulesOptions {
    /// Opens the selected rule store.
    pub fn store(&self) -> CliResult<RuleStore> {
        open_rule_store(self.rules.as_deref())
            .map_err(|e| CliError::io(format!("Failed to locate rules: {e}")))
    }

    /// Loads the selected rules, falling back to defaults on bad documents.
    pub fn load(&self) -> CliResult<Arc<Rules>> {
        Ok(self.store()?.load())
    }
}

/// Design input shared by `bom`, `drawing` and `render`.
#[derive(Debug, Clone, Args)]
pub struct DesignInput {
    /// Design JSON file (`-` reads stdin)
    #[arg(short, long, value_name = "FILE")]
    pub design: PathBuf,

    /// Rule document selection
    #[command(flatten)]
    pub rules: RulesOptions,
}

impl DesignInput {
    /// Loads rules and the normalized design; warnings go to stderr.
    pub fn load(&self) -> CliResult<(ParsedDesign, Arc<Rules>)> {
        let rules = self.rules.load()?;

        let parsed = if self.design.as_os_str() == "-" {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .map_err(|e| CliError::io(format!("Failed to read design from stdin: {e}")))?;
            parse_design_str(&content, &rules)
                .map_err(|e| CliError::validation(format!("Invalid design: {e:#}")))?
        } else {
            if !self.design.exists() {
                return Err(CliError::io(format!(
                    "Design file not found: {}",
                    self.design.display()
                )));
            }
            load_design(&self.design, &rules)
                .map_err(|e| CliError::validation(format!("Invalid design: {e:#}")))?
        };

        for warning in &parsed.warnings {
            eprintln!("⚠ {warning}");
        }
        Ok((parsed, rules))
    }
}

/// Picks the rule document for a binary.
///
/// An explicit path wins, then a non-empty `CABINETDRAFT_CONFIG_DIR`, then
/// the platform config directory.
pub fn open_rule_store(explicit: Option<&Path>) -> anyhow::Result<RuleStore> {
    if let Some(path) = explicit {
        return Ok(RuleStore::new(path));
    }
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => Ok(RuleStore::in_dir(PathBuf::from(dir))),
        _ => RuleStore::at_default_location(),
    }
}

/// Writes `content` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &str) -> CliResult<()> {
    match path {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir).map_err(|e| {
                    CliError::io(format!("Failed to create {}: {e}", dir.display()))
                })?;
            }
            fs::write(path, content)
                .map_err(|e| CliError::io(format!("Failed to write {}: {e}", path.display())))
        }
        None => {
            println!("{content}");
            Ok(())
        }
    }
}

/// Pretty JSON for stdout and files.
pub fn to_json<T: Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))
}
