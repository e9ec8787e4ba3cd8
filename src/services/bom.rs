//! Bill of materials generation.
//!
//! [`generate_bom`] walks every cabinet unit (lower tier, then upper tier,
//! each in position order) and emits fronts, carcass boards and hardware,
//! followed by the run-wide countertop, equipment, accessories and edge
//! banding. It is a pure function of the design and the rules.

use chrono::Utc;
use std::collections::BTreeMap;
use tracing::debug;

use crate::constants::{EDGE_BAND_REFERENCE_HEIGHT_MM, SHEET_WASTE_FACTOR};
use crate::models::{
    BomItem, BomResult, BomSummary, BomUnit, CabinetUnit, EquipmentKind, FrontKind, ModuleType,
    PartCategory, StructuredDesignData, Tier,
};
use crate::rules::Rules;
use crate::services::dimensions::{non_negative, ResolvedDimensions};
use crate::services::fronts::front_slots;

/// Cabinet reference shared by the BOM and the drawings ("L1", "U3").
#[must_use]
pub fn cabinet_ref(tier: Tier, index: usize) -> String {
    let prefix = match tier {
        Tier::Lower => 'L',
        Tier::Upper => 'U',
    };
    format!("{prefix}{}", index + 1)
}

/// Generates the bill of materials for `design`.
///
/// Never fails: empty cabinet lists produce an empty BOM and every dimension
/// is clamped at zero.
#[must_use]
pub fn generate_bom(design: &StructuredDesignData, rules: &Rules) -> BomResult {
    let items = build_items(design, rules);
    let summary = summarize(&items, rules);

    debug!(
        "Generated BOM for {} design: {} items, {} sheets",
        design.category.as_str(),
        summary.total_items,
        summary.estimated_sheets
    );

    BomResult {
        category: design.category,
        style: design.style.clone(),
        items,
        summary,
        generated_at: Utc::now(),
    }
}

/// Counts lines per category and estimates raw sheet usage.
///
/// `estimated_sheets = ceil(sheet part area * 1.15 / sheet area)`.
#[must_use]
pub fn summarize(items: &[BomItem], rules: &Rules) -> BomSummary {
    let mut categories: BTreeMap<PartCategory, usize> =
        PartCategory::ALL.iter().map(|c| (*c, 0)).collect();
    for item in items {
        *categories.entry(item.part_category).or_insert(0) += 1;
    }

    let sheet_part_area: f64 = items
        .iter()
        .filter(|item| item.part_category.is_sheet_part())
        .map(|item| item.face_area() * f64::from(item.quantity))
        .sum();

    let sheet_area = rules.sheet_size.area();
    let estimated_sheets = if sheet_area > 0.0 && sheet_part_area > 0.0 {
        (sheet_part_area * SHEET_WASTE_FACTOR / sheet_area).ceil() as u32
    } else {
        0
    };

    BomSummary {
        total_items: items.len(),
        categories,
        estimated_sheets,
    }
}

/// Accumulates BOM lines with sequential ids.
struct BomBuilder {
    items: Vec<BomItem>,
}

/// Size of a BOM line in millimetres.
#[derive(Clone, Copy)]
struct Size {
    width: f64,
    height: f64,
    depth: f64,
}

impl Size {
    const NONE: Self = Self {
        width: 0.0,
        height: 0.0,
        depth: 0.0,
    };

    const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }
}

impl BomBuilder {
    const fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[allow(clippy::too_many_arguments)]
    fn push(
        &mut self,
        part_category: PartCategory,
        name: impl Into<String>,
        material: impl Into<String>,
        size: Size,
        quantity: u32,
        unit: BomUnit,
        cabinet_ref: Option<&str>,
    ) {
        let id = format!("BOM-{:03}", self.items.len() + 1);
        self.items.push(BomItem {
            id,
            part_category,
            name: name.into(),
            material: material.into(),
            width_mm: non_negative(size.width),
            height_mm: non_negative(size.height),
            depth_mm: non_negative(size.depth),
            quantity,
            unit,
            cabinet_ref: cabinet_ref.map(str::to_string),
        });
    }
}

/// Per-tier sizing passed to the cabinet walker.
struct TierContext {
    tier: Tier,
    body_height: f64,
    depth: f64,
}

fn build_items(design: &StructuredDesignData, rules: &Rules) -> Vec<BomItem> {
    if design.cabinets.is_empty() {
        return Vec::new();
    }

    let dims = ResolvedDimensions::resolve(design, rules);
    let lower = design.lower_sorted();
    let upper = design.upper_sorted();
    let mut bom = BomBuilder::new();

    let lower_ctx = TierContext {
        tier: Tier::Lower,
        body_height: dims.lower_body_height,
        depth: dims.lower_depth,
    };
    for (index, unit) in lower.iter().enumerate() {
        add_cabinet(&mut bom, unit, index, &lower_ctx, &dims, design, rules);
    }

    let upper_ctx = TierContext {
        tier: Tier::Upper,
        body_height: dims.upper_height,
        depth: dims.upper_depth,
    };
    for (index, unit) in upper.iter().enumerate() {
        add_cabinet(&mut bom, unit, index, &upper_ctx, &dims, design, rules);
    }

    if !lower.is_empty() {
        let countertop_label = if design.materials.countertop.trim().is_empty() {
            rules.materials.countertop_label.clone()
        } else {
            design.materials.countertop.clone()
        };
        bom.push(
            PartCategory::Countertop,
            "Countertop",
            countertop_label,
            Size::new(design.row_width(), dims.lower_depth, dims.countertop_thickness),
            1,
            BomUnit::Each,
            None,
        );
    }

    add_equipment(&mut bom, design);
    add_accessories(&mut bom, design, &dims, rules, lower.len());
    add_edge_banding(&mut bom, design, rules);

    bom.items
}

fn add_cabinet(
    bom: &mut BomBuilder,
    unit: &CabinetUnit,
    index: usize,
    ctx: &TierContext,
    dims: &ResolvedDimensions,
    design: &StructuredDesignData,
    rules: &Rules,
) {
    let reference = cabinet_ref(ctx.tier, index);
    let cab = Some(reference.as_str());
    let construction = &rules.construction;
    let body = &rules.materials.body;
    let inner_width = dims.inner_width(unit.width_mm);

    // Fronts
    let door_material = door_material(design, rules);
    for slot in front_slots(unit, ctx.body_height, dims.door_gap) {
        let name = match slot.kind {
            FrontKind::Door => "Door",
            FrontKind::Drawer => "Drawer front",
        };
        bom.push(
            PartCategory::Panel,
            name,
            door_material.clone(),
            Size::new(slot.width, slot.height, dims.door_thickness),
            1,
            BomUnit::Each,
            cab,
        );
    }

    bom.push(
        PartCategory::Board,
        "Side panel",
        body.label.clone(),
        Size::new(ctx.depth, ctx.body_height, dims.body_thickness),
        construction.side_panel_count,
        BomUnit::Each,
        cab,
    );

    // Lower cabinets never get a top board, the countertop covers them
    let (board_name, board_count) = match ctx.tier {
        Tier::Upper if rules.upper_cabinet.top_panel => ("Top/bottom board", 2),
        Tier::Lower | Tier::Upper => ("Bottom board", 1),
    };
    bom.push(
        PartCategory::Board,
        board_name,
        body.label.clone(),
        Size::new(inner_width, ctx.depth, dims.body_thickness),
        board_count,
        BomUnit::Each,
        cab,
    );

    bom.push(
        PartCategory::Board,
        "Band",
        body.label.clone(),
        Size::new(construction.band_width, inner_width, dims.body_thickness),
        construction.band_count,
        BomUnit::Each,
        cab,
    );

    bom.push(
        PartCategory::Board,
        "Back panel",
        rules.materials.back_panel.label.clone(),
        Size::new(
            unit.width_mm - construction.back_panel_clearance,
            ctx.body_height - construction.back_panel_clearance,
            dims.back_thickness,
        ),
        1,
        BomUnit::Each,
        cab,
    );

    if !unit.is_drawer && !unit.is_fridge_bay() {
        bom.push(
            PartCategory::Board,
            "Shelf",
            body.label.clone(),
            Size::new(
                inner_width,
                ctx.depth - construction.shelf_depth_reduction,
                dims.body_thickness,
            ),
            1,
            BomUnit::Each,
            cab,
        );
    }

    add_cabinet_hardware(bom, unit, design, rules, cab);
}

fn add_cabinet_hardware(
    bom: &mut BomBuilder,
    unit: &CabinetUnit,
    design: &StructuredDesignData,
    rules: &Rules,
    cab: Option<&str>,
) {
    let hardware = &rules.hardware;

    if unit.door_count > 0 {
        if unit.is_drawer {
            bom.push(
                PartCategory::Hardware,
                "Drawer rail",
                hardware.drawer_rail_type.clone(),
                Size::NONE,
                unit.door_count,
                BomUnit::Set,
                cab,
            );
        } else {
            bom.push(
                PartCategory::Hardware,
                "Hinge",
                hardware.hinge_type.clone(),
                Size::NONE,
                unit.door_count.saturating_mul(hardware.hinges_per_door),
                BomUnit::Each,
                cab,
            );
        }

        let handle_type = if design.materials.handle_type.trim().is_empty() {
            hardware.handle_type.clone()
        } else {
            design.materials.handle_type.clone()
        };
        bom.push(
            PartCategory::Hardware,
            "Handle",
            handle_type,
            Size::NONE,
            unit.door_count,
            BomUnit::Each,
            cab,
        );
    }

    if unit.module_type == ModuleType::Hanger {
        let rod_length = non_negative(unit.width_mm - 2.0 * rules.materials.body.thickness);
        bom.push(
            PartCategory::Hardware,
            "Hanging rod",
            "Steel rod",
            Size::new(rod_length, 0.0, 0.0),
            1,
            BomUnit::Each,
            cab,
        );
    }
}

/// "white matte Flat", skipping empty parts.
fn door_material(design: &StructuredDesignData, rules: &Rules) -> String {
    let parts = [
        design.materials.door_color.trim(),
        design.materials.door_finish.trim(),
        rules.door.door_type.trim(),
    ];
    let label = parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    if label.is_empty() {
        rules.materials.door.label.clone()
    } else {
        format!("{label} ({})", rules.materials.door.label)
    }
}

fn add_equipment(bom: &mut BomBuilder, design: &StructuredDesignData) {
    for kind in design.category.equipment_kinds() {
        let descriptor = design.equipment.get(*kind);
        let model = descriptor
            .and_then(|d| d.model.clone())
            .unwrap_or_else(|| format!("Standard {}", kind.display_name().to_lowercase()));
        let size = descriptor.map_or(Size::NONE, |d| {
            Size::new(d.width_mm.unwrap_or(0.0), d.depth_mm.unwrap_or(0.0), 0.0)
        });
        let unit = if *kind == EquipmentKind::Faucet {
            BomUnit::Set
        } else {
            BomUnit::Each
        };
        bom.push(
            PartCategory::Equipment,
            kind.display_name(),
            model,
            size,
            1,
            unit,
            None,
        );
    }
}

fn add_accessories(
    bom: &mut BomBuilder,
    design: &StructuredDesignData,
    dims: &ResolvedDimensions,
    rules: &Rules,
    lower_count: usize,
) {
    let body = &rules.materials.body;

    if lower_count > 0 && dims.leg_height > 0.0 {
        let lower_width = crate::models::design::tier_extent(&design.cabinets.lower);
        bom.push(
            PartCategory::Accessory,
            "Baseboard",
            body.label.clone(),
            Size::new(lower_width, dims.leg_height, body.thickness),
            1,
            BomUnit::Each,
            None,
        );
    }

    if !design.cabinets.upper.is_empty() && dims.molding_height > 0.0 {
        let upper_width = crate::models::design::tier_extent(&design.cabinets.upper);
        bom.push(
            PartCategory::Accessory,
            "Crown molding",
            body.label.clone(),
            Size::new(upper_width, dims.molding_height, body.thickness),
            1,
            BomUnit::Each,
            None,
        );
    }

    // Legs are listed for every non-empty design, even without lower cabinets
    let legs = u32::try_from(lower_count)
        .unwrap_or(u32::MAX)
        .saturating_add(1)
        .saturating_mul(2);
    bom.push(
        PartCategory::Accessory,
        "Adjustable leg",
        "ABS",
        Size::new(0.0, dims.leg_height, 0.0),
        legs,
        BomUnit::Each,
        None,
    );
}

/// One aggregated edge banding line: `sum((width + 720) * 2 * door_count)`.
fn add_edge_banding(bom: &mut BomBuilder, design: &StructuredDesignData, rules: &Rules) {
    let length: f64 = design
        .cabinets
        .lower
        .iter()
        .chain(design.cabinets.upper.iter())
        .map(|unit| {
            (unit.width_mm + EDGE_BAND_REFERENCE_HEIGHT_MM) * 2.0 * f64::from(unit.door_count)
        })
        .sum();

    if length <= 0.0 {
        return;
    }

    let thickness = rules.materials.edge_band_thickness;
    bom.push(
        PartCategory::Finish,
        "Edge banding",
        format!("Edge band {thickness}T"),
        Size::new(length, 0.0, thickness),
        1,
        BomUnit::Millimetre,
        None,
    );
}
