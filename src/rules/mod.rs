//! Manufacturing rules.
//!
//! [`Rules`] is the typed configuration tree consumed by the generators:
//! material thicknesses, construction constants, hardware choices and sizing
//! bounds. The built-in defaults live here; [`RuleStore`] layers a persisted
//! JSON document over them.

pub mod merge;
pub mod store;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};

pub use merge::merge_json;
pub use store::{RuleStore, RULES_FILE_NAME};

/// Raw sheet size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSize {
    /// Sheet width
    pub width: f64,
    /// Sheet height
    pub height: f64,
}

impl Default for SheetSize {
    fn default() -> Self {
        Self {
            width: 1220.0,
            height: 2440.0,
        }
    }
}

impl SheetSize {
    /// Sheet area in square millimetres.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// A sheet material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Thickness in millimetres
    pub thickness: f64,
    /// Material label printed on the BOM
    pub label: String,
}

impl MaterialSpec {
    fn new(thickness: f64, label: &str) -> Self {
        Self {
            thickness,
            label: label.to_string(),
        }
    }
}

/// Sheet materials and finishing thicknesses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialRules {
    /// Carcass material
    pub body: MaterialSpec,
    /// Door and drawer front material
    pub door: MaterialSpec,
    /// Back panel material
    pub back_panel: MaterialSpec,
    /// Edge banding thickness
    pub edge_band_thickness: f64,
    /// Countertop thickness
    pub countertop_thickness: f64,
    /// Countertop label used when the design names none
    pub countertop_label: String,
}

impl Default for MaterialRules {
    fn default() -> Self {
        Self {
            body: MaterialSpec::new(18.0, "PB 18T"),
            door: MaterialSpec::new(18.0, "MDF 18T"),
            back_panel: MaterialSpec::new(2.7, "MDF 2.7T"),
            edge_band_thickness: 1.0,
            countertop_thickness: 12.0,
            countertop_label: "Artificial marble 12T".to_string(),
        }
    }
}

/// Default cabinet dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CabinetDefaults {
    /// Lower tier height including legs, excluding the countertop
    pub lower_height: f64,
    /// Lower cabinet depth
    pub lower_depth: f64,
    /// Upper cabinet height
    pub upper_height: f64,
    /// Leg (toe-kick) height
    pub leg_height: f64,
    /// Crown molding height
    pub molding_height: f64,
}

impl Default for CabinetDefaults {
    fn default() -> Self {
        Self {
            lower_height: 870.0,
            lower_depth: 580.0,
            upper_height: 720.0,
            leg_height: 150.0,
            molding_height: 0.0,
        }
    }
}

/// Carcass construction constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructionRules {
    /// Side panels per cabinet
    pub side_panel_count: u32,
    /// Horizontal stiffener width
    pub band_width: f64,
    /// Stiffeners per cabinet
    pub band_count: u32,
    /// Clearance subtracted from back panel width and height
    pub back_panel_clearance: f64,
    /// Clearance subtracted from nominal door and drawer sizes
    pub door_gap: f64,
    /// Shelf set-back from the cabinet depth
    pub shelf_depth_reduction: f64,
}

impl Default for ConstructionRules {
    fn default() -> Self {
        Self {
            side_panel_count: 2,
            band_width: 60.0,
            band_count: 2,
            back_panel_clearance: 1.0,
            door_gap: 4.0,
            shelf_depth_reduction: 20.0,
        }
    }
}

/// Wall cabinet options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpperCabinetRules {
    /// Upper cabinets get a separate top board in addition to the bottom
    pub top_panel: bool,
    /// Upper depth as a fraction of the lower depth
    pub depth_ratio: f64,
}

impl Default for UpperCabinetRules {
    fn default() -> Self {
        Self {
            top_panel: true,
            depth_ratio: 0.55,
        }
    }
}

/// Hardware selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HardwareRules {
    /// Hinge type label
    pub hinge_type: String,
    /// Hinges per door
    pub hinges_per_door: u32,
    /// Handle type label
    pub handle_type: String,
    /// Drawer rail type label
    pub drawer_rail_type: String,
}

impl Default for HardwareRules {
    fn default() -> Self {
        Self {
            hinge_type: "Soft-close hinge 35mm".to_string(),
            hinges_per_door: 2,
            handle_type: "Bar handle".to_string(),
            drawer_rail_type: "Soft-close undermount rail".to_string(),
        }
    }
}

/// Door construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorRules {
    /// Door type label appended to the door material
    pub door_type: String,
}

impl Default for DoorRules {
    fn default() -> Self {
        Self {
            door_type: "Flat".to_string(),
        }
    }
}

/// Crown molding bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoldingRules {
    /// Smallest molding height that is produced
    pub min_height: f64,
    /// Largest molding height
    pub max_height: f64,
}

impl Default for MoldingRules {
    fn default() -> Self {
        Self {
            min_height: 30.0,
            max_height: 200.0,
        }
    }
}

/// Wardrobe sizing bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WardrobeRules {
    /// Narrowest wardrobe unit
    pub min_width: f64,
    /// Widest wardrobe unit
    pub max_width: f64,
    /// Default wardrobe height (no legs)
    pub default_height: f64,
    /// Default wardrobe depth
    pub default_depth: f64,
}

impl Default for WardrobeRules {
    fn default() -> Self {
        Self {
            min_width: 400.0,
            max_width: 1000.0,
            default_height: 2300.0,
            default_depth: 600.0,
        }
    }
}

/// The complete rule tree.
///
/// Every section carries `#[serde(default)]`, so a partial document still
/// deserializes; [`RuleStore`] additionally deep-merges documents over
/// [`Rules::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Rules {
    /// Raw sheet size
    pub sheet_size: SheetSize,
    /// Sheet materials
    pub materials: MaterialRules,
    /// Default cabinet dimensions
    pub cabinet: CabinetDefaults,
    /// Construction constants
    pub construction: ConstructionRules,
    /// Wall cabinet options
    pub upper_cabinet: UpperCabinetRules,
    /// Hardware selection
    pub hardware: HardwareRules,
    /// Door construction
    pub door: DoorRules,
    /// Molding bounds
    pub molding: MoldingRules,
    /// Wardrobe bounds
    pub wardrobe: WardrobeRules,
}

/// Where the effective rules come from and where edits go.
///
/// Generators take `&Rules` directly; surfaces that serve many requests hold
/// a `RulesSource` so tests can substitute [`MemoryRules`] for the file-backed
/// [`RuleStore`].
pub trait RulesSource: Send + Sync {
    /// Returns the rules to use for the next generation call.
    fn rules(&self) -> Arc<Rules>;

    /// Makes `rules` the effective rules.
    fn save(&self, rules: &Rules) -> Result<()>;

    /// Restores the built-in defaults and returns them.
    fn reset(&self) -> Result<Rules> {
        let defaults = Rules::default();
        self.save(&defaults)?;
        Ok(defaults)
    }
}

/// Rules held in memory only.
#[derive(Debug, Default)]
pub struct MemoryRules(RwLock<Arc<Rules>>);

impl MemoryRules {
    /// Starts from `rules`.
    #[must_use]
    pub fn new(rules: Rules) -> Self {
        Self(RwLock::new(Arc::new(rules)))
    }
}

impl RulesSource for MemoryRules {
    fn rules(&self) -> Arc<Rules> {
        Arc::clone(&self.0.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn save(&self, rules: &Rules) -> Result<()> {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(rules.clone());
        Ok(())
    }
}
