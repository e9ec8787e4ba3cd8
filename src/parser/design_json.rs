//! Design JSON parsing and normalization.
//!
//! Designs arrive from image analysis and hand-written files, so cabinet
//! modules are often described loosely: `w` instead of `width_mm`, a `kind`
//! tag instead of `type`, positions left out. [`normalize_design`] rewrites
//! such modules into the canonical [`CabinetUnit`] shape before handing the
//! document to serde.

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::models::{CabinetUnit, DesignCategory, ModuleType, StructuredDesignData};
use crate::rules::Rules;

const WIDTH_KEYS: [&str; 3] = ["width_mm", "width", "w"];
const POSITION_KEYS: [&str; 3] = ["position_mm", "position", "x"];
const DOOR_COUNT_KEYS: [&str; 2] = ["door_count", "doors"];
const TYPE_KEYS: [&str; 3] = ["type", "module_type", "kind"];
const DRAWER_KEYS: [&str; 2] = ["is_drawer", "drawer"];

/// A normalized design plus everything worth telling the user about it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDesign {
    /// Canonical design
    pub design: StructuredDesignData,
    /// Non-fatal findings (out-of-range widths, filled-in values)
    pub warnings: Vec<String>,
}

/// Reads and normalizes a design file.
pub fn load_design(path: &Path, rules: &Rules) -> Result<ParsedDesign> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read design file: {}", path.display()))?;
    parse_design_str(&content, rules)
        .with_context(|| format!("Failed to parse design file: {}", path.display()))
}

/// Parses and normalizes a design from JSON text.
pub fn parse_design_str(content: &str, rules: &Rules) -> Result<ParsedDesign> {
    let value: Value = serde_json::from_str(content).context("Design is not valid JSON")?;
    normalize_design(value, rules)
}

/// Normalizes a design document.
///
/// Cabinet modules in `cabinets.lower` and `cabinets.upper` accept these
/// aliases:
///
/// | canonical     | aliases                 |
/// |---------------|-------------------------|
/// | `width_mm`    | `width`, `w`            |
/// | `position_mm` | `position`, `x`         |
/// | `door_count`  | `doors`                 |
/// | `type`        | `module_type`, `kind`   |
/// | `is_drawer`   | `drawer`                |
///
/// Numbers may be given as strings. Missing positions are filled with the
/// running sum of the widths before them. Wardrobe units outside the rules'
/// width bounds produce a warning, not an error.
pub fn normalize_design(value: Value, rules: &Rules) -> Result<ParsedDesign> {
    let Value::Object(mut root) = value else {
        bail!("Design must be a JSON object");
    };
    let mut warnings = Vec::new();

    if let Some(Value::String(category)) = root.get_mut("category") {
        *category = category.trim().to_ascii_lowercase();
    }

    if let Some(Value::Object(cabinets)) = root.get_mut("cabinets") {
        for tier in ["lower", "upper"] {
            if let Some(modules) = cabinets.get_mut(tier) {
                normalize_tier(tier, modules, &mut warnings)?;
            }
        }
    }

    let design: StructuredDesignData = serde_json::from_value(Value::Object(root))
        .context("Design does not match the expected structure")?;

    if design.category == DesignCategory::Wardrobe {
        check_wardrobe_widths(&design, rules, &mut warnings);
    }

    for warning in &warnings {
        warn!("{}", warning);
    }
    debug!(
        "Parsed {} design: {} lower, {} upper cabinets",
        design.category.as_str(),
        design.cabinets.lower.len(),
        design.cabinets.upper.len()
    );

    Ok(ParsedDesign { design, warnings })
}

fn normalize_tier(tier: &str, modules: &mut Value, warnings: &mut Vec<String>) -> Result<()> {
    let Value::Array(items) = modules else {
        bail!("cabinets.{tier} must be an array");
    };

    let mut running = 0.0;
    for (index, item) in items.iter_mut().enumerate() {
        let Value::Object(module) = item else {
            bail!("cabinets.{tier}[{index}] must be an object");
        };
        let canonical = normalize_module(module, running, tier, index, warnings)?;
        running = canonical.position_mm + canonical.width_mm;
        *item = serde_json::to_value(canonical)?;
    }
    Ok(())
}

fn normalize_module(
    module: &Map<String, Value>,
    running_position: f64,
    tier: &str,
    index: usize,
    warnings: &mut Vec<String>,
) -> Result<CabinetUnit> {
    let label = format!("cabinets.{tier}[{index}]");

    let width_mm = match number_field(module, &WIDTH_KEYS, &label)? {
        Some(width) => width,
        None => {
            warnings.push(format!("{label}: missing width, using 0"));
            0.0
        }
    };
    let position_mm = number_field(module, &POSITION_KEYS, &label)?.unwrap_or(running_position);

    let module_type = first(module, &TYPE_KEYS)
        .and_then(Value::as_str)
        .map(ModuleType::from_tag)
        .unwrap_or_default();

    let is_drawer = match first(module, &DRAWER_KEYS) {
        Some(value) => bool_value(value)
            .with_context(|| format!("{label}: drawer flag must be a boolean"))?,
        None => module_type == ModuleType::Drawer,
    };

    let door_count = match number_field(module, &DOOR_COUNT_KEYS, &label)? {
        Some(count) if count >= 0.0 => count.round() as u32,
        Some(count) => {
            warnings.push(format!("{label}: negative door count {count}, using 0"));
            0
        }
        None => 0,
    };

    Ok(CabinetUnit {
        position_mm,
        width_mm,
        module_type,
        door_count,
        is_drawer,
        has_sink: module.get("has_sink").and_then(bool_value),
        has_cooktop: module.get("has_cooktop").and_then(bool_value),
    })
}

fn first<'a>(module: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| module.get(*key).filter(|v| !v.is_null()))
}

fn number_field(module: &Map<String, Value>, keys: &[&str], label: &str) -> Result<Option<f64>> {
    let Some(value) = first(module, keys) else {
        return Ok(None);
    };
    match value {
        Value::Number(n) => Ok(n.as_f64()),
        Value::String(s) => s
            .trim()
            .trim_end_matches("mm")
            .trim()
            .parse::<f64>()
            .map(Some)
            .with_context(|| format!("{label}: '{s}' is not a number")),
        other => bail!("{label}: expected a number for {}, got {other}", keys[0]),
    }
}

fn bool_value(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f.abs() > f64::EPSILON),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn check_wardrobe_widths(design: &StructuredDesignData, rules: &Rules, warnings: &mut Vec<String>) {
    let (min, max) = (rules.wardrobe.min_width, rules.wardrobe.max_width);
    let tiers = [("lower", &design.cabinets.lower), ("upper", &design.cabinets.upper)];
    for (tier, units) in tiers {
        for (index, unit) in units.iter().enumerate() {
            if unit.width_mm < min || unit.width_mm > max {
                warnings.push(format!(
                    "cabinets.{tier}[{index}]: wardrobe unit width {} mm is outside {min}-{max} mm",
                    unit.width_mm
                ));
            }
        }
    }
}
