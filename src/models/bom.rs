//! Bill of materials data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::design::DesignCategory;

/// Part category of a BOM line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartCategory {
    /// Door and drawer fronts
    Panel,
    /// Structural carcass boards
    Board,
    /// Hinges, handles, rails
    Hardware,
    /// Countertop slab
    Countertop,
    /// Sink, faucet, cooktop, hood
    Equipment,
    /// Baseboard, molding, legs
    Accessory,
    /// Edge banding and other finishing material
    Finish,
}

impl PartCategory {
    /// All categories in summary order.
    pub const ALL: [Self; 7] = [
        Self::Panel,
        Self::Board,
        Self::Hardware,
        Self::Countertop,
        Self::Equipment,
        Self::Accessory,
        Self::Finish,
    ];

    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Panel => "panel",
            Self::Board => "board",
            Self::Hardware => "hardware",
            Self::Countertop => "countertop",
            Self::Equipment => "equipment",
            Self::Accessory => "accessory",
            Self::Finish => "finish",
        }
    }

    /// Whether the part is cut from sheet stock.
    #[must_use]
    pub const fn is_sheet_part(self) -> bool {
        matches!(self, Self::Panel | Self::Board)
    }
}

/// Counting unit of a BOM line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BomUnit {
    /// Each
    #[serde(rename = "ea")]
    Each,
    /// Millimetres of length
    #[serde(rename = "mm")]
    Millimetre,
    /// Set
    #[serde(rename = "set")]
    Set,
}

impl BomUnit {
    /// Short label used in tables.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Each => "ea",
            Self::Millimetre => "mm",
            Self::Set => "set",
        }
    }
}

/// A single line of the bill of materials.
///
/// # Invariants
///
/// - every dimension is >= 0
/// - `id` is `BOM-NNN`, unique and increasing within one generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomItem {
    /// Sequential identifier (e.g., "BOM-001")
    pub id: String,
    /// Part category
    pub part_category: PartCategory,
    /// Human readable part name
    pub name: String,
    /// Material label
    pub material: String,
    /// Width in millimetres
    pub width_mm: f64,
    /// Height (or length) in millimetres
    pub height_mm: f64,
    /// Depth or thickness in millimetres
    pub depth_mm: f64,
    /// Quantity
    pub quantity: u32,
    /// Counting unit
    pub unit: BomUnit,
    /// Owning cabinet (e.g., "L1", "U2")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cabinet_ref: Option<String>,
}

impl BomItem {
    /// Face area of one piece in square millimetres.
    #[must_use]
    pub fn face_area(&self) -> f64 {
        self.width_mm * self.height_mm
    }
}

/// Aggregate counts over a BOM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BomSummary {
    /// Number of BOM lines
    pub total_items: usize,
    /// Lines per part category (every category present)
    pub categories: BTreeMap<PartCategory, usize>,
    /// Raw sheets needed including the waste allowance
    pub estimated_sheets: u32,
}

/// Output of the BOM generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomResult {
    /// Design category
    pub category: DesignCategory,
    /// Design style
    pub style: String,
    /// Ordered BOM lines
    pub items: Vec<BomItem>,
    /// Counts and sheet estimate
    pub summary: BomSummary,
    /// Generation time (excluded from determinism)
    pub generated_at: DateTime<Utc>,
}

impl BomResult {
    /// Iterates over the lines of one category.
    pub fn items_in(&self, category: PartCategory) -> impl Iterator<Item = &BomItem> {
        self.items
            .iter()
            .filter(move |item| item.part_category == category)
    }

    /// Looks up a line by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&BomItem> {
        self.items.iter().find(|item| item.id == id)
    }
}
