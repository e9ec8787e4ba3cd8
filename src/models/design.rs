//! Structured design input produced by the wall-analysis pipeline.
//!
//! Every field that the analysis may fail to produce is optional or carries a
//! serde default, so a partially filled document still deserializes.

use serde::{Deserialize, Serialize};

/// Furniture category of a design.
///
/// The category decides which equipment (sink, faucet, cooktop, hood) the
/// bill of materials carries and which default dimensions apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DesignCategory {
    /// Kitchen sink run (sink, faucet, cooktop and hood)
    #[default]
    Sink,
    /// Bathroom vanity (sink and faucet only)
    Vanity,
    /// Full-height wardrobe
    Wardrobe,
    /// Fridge surround
    Fridge,
    /// Generic storage
    Storage,
    /// Anything the analysis could not classify
    #[serde(other)]
    Other,
}

impl DesignCategory {
    /// Returns the equipment kinds this category installs, in BOM order.
    #[must_use]
    pub const fn equipment_kinds(self) -> &'static [EquipmentKind] {
        match self {
            Self::Sink => &[
                EquipmentKind::Sink,
                EquipmentKind::Faucet,
                EquipmentKind::Cooktop,
                EquipmentKind::Hood,
            ],
            Self::Vanity => &[EquipmentKind::Sink, EquipmentKind::Faucet],
            Self::Wardrobe | Self::Fridge | Self::Storage | Self::Other => &[],
        }
    }

    /// Lowercase identifier used in JSON and file names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sink => "sink",
            Self::Vanity => "vanity",
            Self::Wardrobe => "wardrobe",
            Self::Fridge => "fridge",
            Self::Storage => "storage",
            Self::Other => "other",
        }
    }
}

/// Kind of installed equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentKind {
    /// Sink bowl
    Sink,
    /// Faucet
    Faucet,
    /// Cooktop (hob)
    Cooktop,
    /// Range hood
    Hood,
}

impl EquipmentKind {
    /// Human readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Sink => "Sink",
            Self::Faucet => "Faucet",
            Self::Cooktop => "Cooktop",
            Self::Hood => "Range hood",
        }
    }
}

/// Wall measurements reported by the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WallInfo {
    /// Wall width in millimetres
    pub width_mm: f64,
    /// Wall height in millimetres
    pub height_mm: f64,
    /// Detection confidence (0.0 - 1.0)
    pub confidence: f64,
    /// Tile type, when the wall is tiled (enables the tile grid)
    pub tile_type: Option<String>,
}

/// Position of a single utility pipe along the wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UtilityPosition {
    /// Whether the pipe was found at all
    pub detected: bool,
    /// Horizontal offset from the row's left edge
    pub from_origin_mm: f64,
}

/// Detected utility connections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UtilityPositions {
    /// Water supply / drain
    pub water: UtilityPosition,
    /// Exhaust duct
    pub exhaust: UtilityPosition,
    /// Gas pipe
    pub gas: UtilityPosition,
}

/// Shape of the cabinet run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    /// Straight run along one wall
    #[default]
    Straight,
    /// L-shaped run
    LShape,
    /// U-shaped run
    UShape,
    /// Parallel runs
    Parallel,
}

/// Overall layout of the cabinet run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LayoutInfo {
    /// Run shape
    pub direction: LayoutDirection,
    /// Total run width (0 = derive from the cabinets)
    pub total_width_mm: f64,
    /// Lower cabinet depth (None = rule default)
    pub depth_mm: Option<f64>,
}

/// Cabinet module type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModuleType {
    /// Plain door cabinet
    #[default]
    Standard,
    /// Sink base
    Sink,
    /// Cooktop base
    Cooktop,
    /// Drawer bank
    Drawer,
    /// Wardrobe hanging section
    Hanger,
    /// Open or shelved section
    Shelf,
    /// Fridge bay
    Fridge,
    /// Built-in appliance housing
    Appliance,
    /// Corner unit
    Corner,
}

impl ModuleType {
    /// Parses a loose type tag, falling back to `Standard`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "sink" => Self::Sink,
            "cooktop" | "hob" | "stove" => Self::Cooktop,
            "drawer" | "drawers" => Self::Drawer,
            "hanger" | "hanging" => Self::Hanger,
            "shelf" | "open" => Self::Shelf,
            "fridge" | "refrigerator" => Self::Fridge,
            "appliance" => Self::Appliance,
            "corner" => Self::Corner,
            _ => Self::Standard,
        }
    }
}

/// One segment of a cabinet row.
///
/// `position_mm` is expected to equal the sum of the widths before it in the
/// same tier; it is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CabinetUnit {
    /// Left edge offset within the tier
    #[serde(default)]
    pub position_mm: f64,
    /// Cabinet width
    pub width_mm: f64,
    /// Module type tag
    #[serde(default, rename = "type")]
    pub module_type: ModuleType,
    /// Number of doors, or drawer fronts when `is_drawer` is set
    #[serde(default)]
    pub door_count: u32,
    /// Drawer bank flag
    #[serde(default)]
    pub is_drawer: bool,
    /// Cabinet holds the sink
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_sink: Option<bool>,
    /// Cabinet holds the cooktop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_cooktop: Option<bool>,
}

impl CabinetUnit {
    /// Creates a plain door cabinet.
    #[must_use]
    pub const fn new(position_mm: f64, width_mm: f64, door_count: u32) -> Self {
        Self {
            position_mm,
            width_mm,
            module_type: ModuleType::Standard,
            door_count,
            is_drawer: false,
            has_sink: None,
            has_cooktop: None,
        }
    }

    /// Creates a drawer bank with `drawers` fronts.
    #[must_use]
    pub const fn drawer(position_mm: f64, width_mm: f64, drawers: u32) -> Self {
        Self {
            position_mm,
            width_mm,
            module_type: ModuleType::Drawer,
            door_count: drawers,
            is_drawer: true,
            has_sink: None,
            has_cooktop: None,
        }
    }

    /// Sets the module type.
    #[must_use]
    pub const fn with_type(mut self, module_type: ModuleType) -> Self {
        self.module_type = module_type;
        self
    }

    /// Whether this unit is an open fridge bay.
    #[must_use]
    pub fn is_fridge_bay(&self) -> bool {
        self.module_type == ModuleType::Fridge
    }

    /// Whether the unit holds the sink, by flag or by type.
    #[must_use]
    pub fn holds_sink(&self) -> bool {
        self.has_sink.unwrap_or(self.module_type == ModuleType::Sink)
    }

    /// Whether the unit holds the cooktop, by flag or by type.
    #[must_use]
    pub fn holds_cooktop(&self) -> bool {
        self.has_cooktop
            .unwrap_or(self.module_type == ModuleType::Cooktop)
    }
}

/// Lower and upper cabinet tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CabinetTiers {
    /// Base cabinets standing on legs
    pub lower: Vec<CabinetUnit>,
    /// Wall-hung cabinets
    pub upper: Vec<CabinetUnit>,
}

impl CabinetTiers {
    /// True when neither tier has a cabinet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty() && self.upper.is_empty()
    }
}

/// Per-tier heights. `None` means "use the rule default".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CabinetSpecs {
    /// Lower tier height including legs, excluding the countertop
    pub lower_height_mm: Option<f64>,
    /// Upper cabinet height
    pub upper_height_mm: Option<f64>,
    /// Upper cabinet depth
    pub upper_depth_mm: Option<f64>,
    /// Leg (toe-kick) height
    pub leg_height_mm: Option<f64>,
    /// Crown molding height above the upper tier
    pub molding_height_mm: Option<f64>,
}

/// A piece of installed equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EquipmentDescriptor {
    /// Model or product name
    pub model: Option<String>,
    /// Footprint width
    pub width_mm: Option<f64>,
    /// Footprint depth
    pub depth_mm: Option<f64>,
    /// Horizontal centre along the row
    pub center_mm: Option<f64>,
}

/// Optional equipment descriptors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EquipmentSet {
    /// Sink bowl
    pub sink: Option<EquipmentDescriptor>,
    /// Faucet
    pub faucet: Option<EquipmentDescriptor>,
    /// Cooktop
    pub cooktop: Option<EquipmentDescriptor>,
    /// Range hood
    pub hood: Option<EquipmentDescriptor>,
}

impl EquipmentSet {
    /// Returns the descriptor for `kind`, if present.
    #[must_use]
    pub const fn get(&self, kind: EquipmentKind) -> Option<&EquipmentDescriptor> {
        match kind {
            EquipmentKind::Sink => self.sink.as_ref(),
            EquipmentKind::Faucet => self.faucet.as_ref(),
            EquipmentKind::Cooktop => self.cooktop.as_ref(),
            EquipmentKind::Hood => self.hood.as_ref(),
        }
    }
}

/// Resolved finish choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MaterialChoices {
    /// Door color (e.g., "white")
    pub door_color: String,
    /// Door finish (e.g., "matte")
    pub door_finish: String,
    /// Countertop material (e.g., "quartz")
    pub countertop: String,
    /// Handle type (empty = rule default)
    pub handle_type: String,
}

/// The complete design consumed by the BOM and drawing generators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StructuredDesignData {
    /// Furniture category
    pub category: DesignCategory,
    /// Style keyword (e.g., "modern")
    pub style: String,
    /// Wall measurements
    pub wall: WallInfo,
    /// Detected utility positions
    pub utilities: UtilityPositions,
    /// Run layout
    pub layout: LayoutInfo,
    /// Cabinet units per tier
    pub cabinets: CabinetTiers,
    /// Per-tier heights
    pub cabinet_specs: CabinetSpecs,
    /// Equipment descriptors
    pub equipment: EquipmentSet,
    /// Finish choices
    pub materials: MaterialChoices,
}

impl StructuredDesignData {
    /// Creates an empty design for `category`.
    #[must_use]
    pub fn new(category: DesignCategory) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    /// Lower cabinets sorted by position.
    #[must_use]
    pub fn lower_sorted(&self) -> Vec<&CabinetUnit> {
        sorted_by_position(&self.cabinets.lower)
    }

    /// Upper cabinets sorted by position.
    #[must_use]
    pub fn upper_sorted(&self) -> Vec<&CabinetUnit> {
        sorted_by_position(&self.cabinets.upper)
    }

    /// Width spanned by the run.
    ///
    /// Uses `layout.total_width_mm` when set, otherwise the right-most cabinet
    /// edge of either tier.
    #[must_use]
    pub fn row_width(&self) -> f64 {
        if self.layout.total_width_mm > 0.0 {
            return self.layout.total_width_mm;
        }
        tier_extent(&self.cabinets.lower).max(tier_extent(&self.cabinets.upper))
    }
}

/// Right-most edge of a tier (0 for an empty tier).
#[must_use]
pub fn tier_extent(units: &[CabinetUnit]) -> f64 {
    units
        .iter()
        .map(|u| u.position_mm + u.width_mm)
        .fold(0.0, f64::max)
}

fn sorted_by_position(units: &[CabinetUnit]) -> Vec<&CabinetUnit> {
    let mut sorted: Vec<&CabinetUnit> = units.iter().collect();
    sorted.sort_by(|a, b| a.position_mm.total_cmp(&b.position_mm));
    sorted
}
