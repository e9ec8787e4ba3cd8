//! Drawing coordinate model.
//!
//! All values are millimetres in an architectural frame: x grows rightward
//! from the left edge of the cabinet row, y grows upward from the floor.
//! The plan view reuses the same types with y measured out from the wall.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::design::{DesignCategory, EquipmentKind};

/// Axis-aligned rectangle anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Bottom edge
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Centre point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// The four sides as lines: bottom, right, top, left.
    #[must_use]
    pub fn edges(&self) -> [Line; 4] {
        let (l, b, r, t) = (self.x, self.y, self.right(), self.top());
        [
            Line::new(l, b, r, b),
            Line::new(r, b, r, t),
            Line::new(r, t, l, t),
            Line::new(l, t, l, b),
        ]
    }
}

/// Straight segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Line {
    /// Start x
    pub x1: f64,
    /// Start y
    pub y1: f64,
    /// End x
    pub x2: f64,
    /// End y
    pub y2: f64,
}

impl Line {
    /// Creates a line.
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// A location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point {
    /// x coordinate
    pub x: f64,
    /// y coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Annotated measurement between two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionLine {
    /// Start of the measured span
    pub start: Point,
    /// End of the measured span
    pub end: Point,
    /// Measured value
    pub value: f64,
    /// Unit label (always "mm" here)
    pub unit: String,
    /// Optional description (e.g., "W", "Lower")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DimensionLine {
    /// Horizontal dimension from `x1` to `x2` drawn at height `y`.
    #[must_use]
    pub fn horizontal(x1: f64, x2: f64, y: f64, label: Option<&str>) -> Self {
        Self {
            start: Point::new(x1, y),
            end: Point::new(x2, y),
            value: round_mm((x2 - x1).abs()),
            unit: "mm".to_string(),
            label: label.map(str::to_string),
        }
    }

    /// Vertical dimension from `y1` to `y2` drawn at offset `x`.
    #[must_use]
    pub fn vertical(y1: f64, y2: f64, x: f64, label: Option<&str>) -> Self {
        Self {
            start: Point::new(x, y1),
            end: Point::new(x, y2),
            value: round_mm((y2 - y1).abs()),
            unit: "mm".to_string(),
            label: label.map(str::to_string),
        }
    }

    /// Whether the span runs mostly along x.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        (self.end.x - self.start.x).abs() >= (self.end.y - self.start.y).abs()
    }
}

/// Rounds to one decimal place, enough for 2.7 mm backs.
fn round_mm(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Tier a cabinet belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Base cabinets
    Lower,
    /// Wall cabinets
    Upper,
}

/// Cabinet carcass outline in the front view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CabinetOutline {
    /// Cabinet reference shared with the BOM (e.g., "L1")
    pub cabinet_ref: String,
    /// Tier
    pub tier: Tier,
    /// Outline
    pub rect: Rect,
}

/// Front kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontKind {
    /// Hinged door
    Door,
    /// Drawer front
    Drawer,
}

/// A door or drawer front in the front view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontPanel {
    /// Owning cabinet
    pub cabinet_ref: String,
    /// Door or drawer
    pub kind: FrontKind,
    /// Front outline
    pub rect: Rect,
}

/// Hardware icon kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardwareKind {
    /// Hinge cup
    Hinge,
    /// Door or drawer handle
    Handle,
    /// Drawer rail
    Rail,
}

/// Hardware location in the front view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareMark {
    /// Hardware kind
    pub kind: HardwareKind,
    /// Location
    pub position: Point,
    /// Owning cabinet
    pub cabinet_ref: String,
}

/// Elevation of the whole run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FrontView {
    /// Total drawn width
    pub width: f64,
    /// Total drawn height
    pub height: f64,
    /// Carcass outlines
    pub cabinets: Vec<CabinetOutline>,
    /// Door and drawer fronts
    pub fronts: Vec<FrontPanel>,
    /// Hinges, handles and rails
    pub hardware: Vec<HardwareMark>,
    /// Countertop slab
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countertop: Option<Rect>,
    /// Crown molding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub molding: Option<Rect>,
    /// Baseboard (toe kick)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseboard: Option<Rect>,
    /// Dimension annotations
    pub dimensions: Vec<DimensionLine>,
}

/// Part of the side cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionPartKind {
    /// Side panel edge
    SidePanel,
    /// Bottom board
    BottomBoard,
    /// Back panel
    BackPanel,
    /// Shelf
    Shelf,
    /// Countertop
    Countertop,
}

/// One labelled rectangle of the cross-section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionPart {
    /// Part kind
    pub kind: SectionPartKind,
    /// Outline (x = depth from the front)
    pub rect: Rect,
}

/// Cross-section through a representative cabinet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SideView {
    /// Cabinet depth
    pub depth: f64,
    /// Carcass body height
    pub body_height: f64,
    /// Section parts
    pub parts: Vec<SectionPart>,
    /// Dimension annotations
    pub dimensions: Vec<DimensionLine>,
}

/// Cabinet footprint in the plan view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanFootprint {
    /// Cabinet reference
    pub cabinet_ref: String,
    /// Tier
    pub tier: Tier,
    /// Footprint (y = distance from the wall)
    pub rect: Rect,
}

/// Top-down view of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlanView {
    /// Total drawn width
    pub width: f64,
    /// Total drawn depth
    pub depth: f64,
    /// Cabinet footprints
    pub cabinets: Vec<PlanFootprint>,
    /// Countertop footprint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countertop: Option<Rect>,
    /// Dimension annotations
    pub dimensions: Vec<DimensionLine>,
}

/// The three architectural views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CommonViews {
    /// Elevation
    pub front_view: FrontView,
    /// Cross-section
    pub side_view: SideView,
    /// Plan
    pub plan_view: PlanView,
}

/// One cut panel in the manufacturing sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelDetail {
    /// Source BOM line
    pub bom_id: String,
    /// Part name
    pub name: String,
    /// Material label
    pub material: String,
    /// Thickness
    pub thickness: f64,
    /// Pieces to cut
    pub quantity: u32,
    /// Grid column (0-2)
    pub column: usize,
    /// Grid row
    pub row: usize,
    /// Panel outline at its grid position
    pub rect: Rect,
    /// Width and height annotations
    pub dimensions: Vec<DimensionLine>,
    /// Edge banding (four sides for fronts, none for boards)
    pub edge_banding: Vec<Line>,
}

/// Flat cut-sheet layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ManufacturingLayout {
    /// Panels in BOM order
    pub panels: Vec<PanelDetail>,
    /// Cabinet reference to BOM ids
    pub bom_references: BTreeMap<String, Vec<String>>,
}

/// Utility kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilityKind {
    /// Water supply / drain
    Water,
    /// Exhaust duct
    Exhaust,
    /// Gas pipe
    Gas,
}

impl UtilityKind {
    /// One-letter glyph for the marker.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Water => "W",
            Self::Exhaust => "E",
            Self::Gas => "G",
        }
    }

    /// Marker label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Water => "Water",
            Self::Exhaust => "Exhaust",
            Self::Gas => "Gas",
        }
    }
}

/// Utility connection on the wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilityMarker {
    /// Utility kind
    pub kind: UtilityKind,
    /// Position on the wall
    pub position: Point,
}

/// Footprint reserved for equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentZone {
    /// Equipment kind
    pub kind: EquipmentKind,
    /// Zone on the wall elevation
    pub rect: Rect,
}

/// Area to keep free in front of the cabinets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearanceZone {
    /// Zone on the wall elevation
    pub rect: Rect,
    /// Door swing allowance in front of the row
    pub swing_depth: f64,
    /// Description
    pub label: String,
}

/// Tile grid over the wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileGrid {
    /// Tile type
    pub tile_type: String,
    /// Tile width
    pub tile_width: f64,
    /// Tile height
    pub tile_height: f64,
    /// Columns (ceil)
    pub cols: u32,
    /// Rows (ceil)
    pub rows: u32,
}

/// Wall-relative installation layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InstallationLayout {
    /// Wall outline
    pub wall: Rect,
    /// Tile grid, when the tile type is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile_grid: Option<TileGrid>,
    /// Detected utilities
    pub utility_markers: Vec<UtilityMarker>,
    /// Equipment footprints
    pub equipment_zones: Vec<EquipmentZone>,
    /// Clearance zones
    pub clearance_zones: Vec<ClearanceZone>,
}

/// Drawing metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingMetadata {
    /// Design category
    pub category: DesignCategory,
    /// Design style
    pub style: String,
    /// Generation time
    pub generated_at: DateTime<Utc>,
}

/// Output of the drawing generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingData {
    /// Front, side and plan views
    pub common: CommonViews,
    /// Cut-sheet layout
    pub manufacturing: ManufacturingLayout,
    /// Wall layout
    pub installation: InstallationLayout,
    /// Metadata
    pub metadata: DrawingMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_are_closed() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        let edges = rect.edges();
        for pair in edges.windows(2) {
            assert!((pair[0].x2 - pair[1].x1).abs() < f64::EPSILON);
            assert!((pair[0].y2 - pair[1].y1).abs() < f64::EPSILON);
        }
        assert!((edges[3].x2 - edges[0].x1).abs() < f64::EPSILON);
        assert!((edges[3].y2 - edges[0].y1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dimension_value_and_orientation() {
        let dim = DimensionLine::horizontal(0.0, 800.0, -80.0, None);
        assert!((dim.value - 800.0).abs() < f64::EPSILON);
        assert!(dim.is_horizontal());

        let dim = DimensionLine::vertical(150.0, 870.0, -80.0, Some("Lower"));
        assert!((dim.value - 720.0).abs() < f64::EPSILON);
        assert!(!dim.is_horizontal());
        assert_eq!(dim.label.as_deref(), Some("Lower"));
    }

    #[test]
    fn test_dimension_keeps_fractional_thickness() {
        let dim = DimensionLine::horizontal(577.3, 580.0, 900.0, None);
        assert!((dim.value - 2.7).abs() < 1e-9);
    }
}
