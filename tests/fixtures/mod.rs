//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use cabinetdraft::models::{
    CabinetUnit, DesignCategory, EquipmentDescriptor, ModuleType, StructuredDesignData,
};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Path to the cabinetdraft binary
pub fn cabinetdraft_bin() -> &'static str {
    env!("CARGO_BIN_EXE_cabinetdraft")
}

/// A sink wall in loose JSON form, the way the analysis pipeline emits it.
///
/// 3600 mm wall with a sink base (800, 2 doors), a drawer bank (600, 3
/// drawers), a cooktop base (800, 1 door) and one wall unit (900, 2 doors).
pub fn sink_design_json() -> Value {
    json!({
        "category": "sink",
        "style": "modern",
        "wall": {"width_mm": 3600, "height_mm": 2400, "confidence": 0.9, "tile_type": "ceramic"},
        "utilities": {
            "water": {"detected": true, "from_origin_mm": 400},
            "exhaust": {"detected": true, "from_origin_mm": 1800},
            "gas": {"detected": false, "from_origin_mm": 0}
        },
        "layout": {"direction": "straight", "total_width_mm": 3600},
        "cabinets": {
            "lower": [
                {"w": 800, "doors": 2, "kind": "sink"},
                {"w": 600, "doors": 3, "kind": "drawer"},
                {"w": 800, "doors": 1, "kind": "cooktop"}
            ],
            "upper": [
                {"width_mm": 900, "door_count": 2}
            ]
        },
        "equipment": {
            "sink": {"model": "Undermount 760", "width_mm": 760, "center_mm": 400},
            "faucet": {"model": "Pull-out"},
            "cooktop": {"width_mm": 600},
            "hood": {}
        },
        "materials": {
            "door_color": "white",
            "door_finish": "matte",
            "countertop": "Quartz 12T",
            "handle_type": "bar"
        }
    })
}

/// The same sink wall as a canonical model.
pub fn sink_design() -> StructuredDesignData {
    let mut design = StructuredDesignData::new(DesignCategory::Sink);
    design.style = "modern".to_string();
    design.wall.width_mm = 3600.0;
    design.wall.height_mm = 2400.0;
    design.wall.tile_type = Some("ceramic".to_string());
    design.utilities.water.detected = true;
    design.utilities.water.from_origin_mm = 400.0;
    design.utilities.exhaust.detected = true;
    design.utilities.exhaust.from_origin_mm = 1800.0;
    design.layout.total_width_mm = 3600.0;
    design.cabinets.lower = vec![
        CabinetUnit::new(0.0, 800.0, 2).with_type(ModuleType::Sink),
        CabinetUnit::drawer(800.0, 600.0, 3),
        CabinetUnit::new(1400.0, 800.0, 1).with_type(ModuleType::Cooktop),
    ];
    design.cabinets.upper = vec![CabinetUnit::new(0.0, 900.0, 2)];
    design.equipment.sink = Some(EquipmentDescriptor {
        model: Some("Undermount 760".to_string()),
        width_mm: Some(760.0),
        depth_mm: None,
        center_mm: Some(400.0),
    });
    design.equipment.faucet = Some(EquipmentDescriptor {
        model: Some("Pull-out".to_string()),
        ..EquipmentDescriptor::default()
    });
    design.equipment.cooktop = Some(EquipmentDescriptor {
        width_mm: Some(600.0),
        ..EquipmentDescriptor::default()
    });
    design.equipment.hood = Some(EquipmentDescriptor::default());
    design.materials.door_color = "white".to_string();
    design.materials.door_finish = "matte".to_string();
    design.materials.countertop = "Quartz 12T".to_string();
    design.materials.handle_type = "bar".to_string();
    design
}

/// Writes `value` as JSON to `path`.
pub fn write_json(value: &Value, path: &Path) -> std::io::Result<()> {
    let content = serde_json::to_string_pretty(value).expect("Failed to serialize JSON");
    fs::write(path, content)
}

/// Creates a design file in a temp directory and returns the path.
pub fn create_temp_design_file(design: &Value) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let design_path = temp_dir.path().join("design.json");
    write_json(design, &design_path).expect("Failed to write design file");
    (design_path, temp_dir)
}

/// A cabinetdraft command whose config directory is `config_dir`.
///
/// Keeps tests away from the real rule document.
pub fn isolated_command(config_dir: &Path) -> Command {
    let mut command = Command::new(cabinetdraft_bin());
    command.env("CABINETDRAFT_CONFIG_DIR", config_dir);
    command
}
