//! Data models for designs, bills of materials and drawings.
//!
//! This module contains the plain data structures passed between the rule
//! store, the generators and the renderer. Models carry no I/O.

pub mod bom;
pub mod design;
pub mod drawing;

// Re-export all model types
pub use bom::{BomItem, BomResult, BomSummary, BomUnit, PartCategory};
pub use design::{
    CabinetSpecs, CabinetTiers, CabinetUnit, DesignCategory, EquipmentDescriptor, EquipmentKind,
    EquipmentSet, LayoutDirection, LayoutInfo, MaterialChoices, ModuleType, StructuredDesignData,
    UtilityPosition, UtilityPositions, WallInfo,
};
pub use drawing::{
    CabinetOutline, ClearanceZone, CommonViews, DimensionLine, DrawingData, DrawingMetadata,
    EquipmentZone, FrontKind, FrontPanel, FrontView, HardwareKind, HardwareMark,
    InstallationLayout, Line, ManufacturingLayout, PanelDetail, PlanFootprint, PlanView, Point,
    Rect, SectionPart, SectionPartKind, SideView, Tier, TileGrid, UtilityKind, UtilityMarker,
};
