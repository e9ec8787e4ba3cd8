//! Wall-relative installation layout.

use crate::models::design::tier_extent;
use crate::models::{
    CabinetUnit, ClearanceZone, EquipmentKind, EquipmentZone, FrontKind, InstallationLayout, Point,
    Rect, StructuredDesignData, TileGrid, UtilityKind, UtilityMarker, UtilityPosition,
};
use crate::services::dimensions::{non_negative, ResolvedDimensions};
use crate::services::fronts::front_slots;

/// Tile cell used for the wall grid.
pub const TILE_WIDTH_MM: f64 = 300.0;
/// Tile cell used for the wall grid.
pub const TILE_HEIGHT_MM: f64 = 600.0;

/// Nominal water connection height.
const WATER_HEIGHT_MM: f64 = 500.0;
/// Exhaust duct sits this far below the ceiling.
const EXHAUST_CEILING_OFFSET_MM: f64 = 200.0;
/// Nominal gas connection height.
const GAS_HEIGHT_MM: f64 = 400.0;

/// Hood zone height inside the upper tier.
const HOOD_ZONE_HEIGHT_MM: f64 = 400.0;

/// Builds the wall layout: wall outline, tile grid, utility markers,
/// equipment zones and the clearance zone in front of the lower row.
pub fn build_installation_layout(
    design: &StructuredDesignData,
    dims: &ResolvedDimensions,
) -> InstallationLayout {
    let wall_width = if design.wall.width_mm > 0.0 {
        design.wall.width_mm
    } else {
        design.row_width()
    };
    let wall_height = if design.wall.height_mm > 0.0 {
        design.wall.height_mm
    } else {
        dims.upper_base_y() + dims.upper_height
    };

    InstallationLayout {
        wall: Rect::new(0.0, 0.0, wall_width, wall_height),
        tile_grid: tile_grid(design, wall_width, wall_height),
        utility_markers: utility_markers(design, wall_height),
        equipment_zones: equipment_zones(design, dims),
        clearance_zones: clearance_zone(design, dims).into_iter().collect(),
    }
}

fn tile_grid(design: &StructuredDesignData, wall_width: f64, wall_height: f64) -> Option<TileGrid> {
    let tile_type = design.wall.tile_type.as_deref()?.trim();
    if tile_type.is_empty() || wall_width <= 0.0 || wall_height <= 0.0 {
        return None;
    }

    Some(TileGrid {
        tile_type: tile_type.to_string(),
        tile_width: TILE_WIDTH_MM,
        tile_height: TILE_HEIGHT_MM,
        cols: (wall_width / TILE_WIDTH_MM).ceil() as u32,
        rows: (wall_height / TILE_HEIGHT_MM).ceil() as u32,
    })
}

fn utility_markers(design: &StructuredDesignData, wall_height: f64) -> Vec<UtilityMarker> {
    let utilities = &design.utilities;
    let candidates: [(UtilityKind, UtilityPosition, f64); 3] = [
        (UtilityKind::Water, utilities.water, WATER_HEIGHT_MM),
        (
            UtilityKind::Exhaust,
            utilities.exhaust,
            non_negative(wall_height - EXHAUST_CEILING_OFFSET_MM),
        ),
        (UtilityKind::Gas, utilities.gas, GAS_HEIGHT_MM),
    ];

    candidates
        .into_iter()
        .filter(|(_, position, _)| position.detected)
        .map(|(kind, position, height)| UtilityMarker {
            kind,
            position: Point::new(position.from_origin_mm, height),
        })
        .collect()
}

fn equipment_zones(design: &StructuredDesignData, dims: &ResolvedDimensions) -> Vec<EquipmentZone> {
    let sink_cabinet = design.cabinets.lower.iter().find(|u| u.holds_sink());
    let cooktop_cabinet = design.cabinets.lower.iter().find(|u| u.holds_cooktop());

    let mut zones = Vec::new();
    for (kind, host) in [
        (EquipmentKind::Sink, sink_cabinet),
        (EquipmentKind::Cooktop, cooktop_cabinet),
        (EquipmentKind::Hood, cooktop_cabinet),
    ] {
        let Some(descriptor) = design.equipment.get(kind) else {
            continue;
        };
        let Some(center) = descriptor.center_mm.or_else(|| host.map(cabinet_center)) else {
            continue;
        };
        let width = descriptor
            .width_mm
            .or_else(|| host.map(|u| u.width_mm))
            .map_or(0.0, non_negative);

        let (y, height) = match kind {
            EquipmentKind::Hood => (
                dims.upper_base_y(),
                dims.upper_height.min(HOOD_ZONE_HEIGHT_MM),
            ),
            EquipmentKind::Sink | EquipmentKind::Cooktop | EquipmentKind::Faucet => {
                (dims.leg_height, dims.lower_body_height)
            }
        };

        zones.push(EquipmentZone {
            kind,
            rect: Rect::new(center - width / 2.0, y, width, height),
        });
    }
    zones
}

fn cabinet_center(unit: &CabinetUnit) -> f64 {
    unit.position_mm + unit.width_mm / 2.0
}

/// Doors swing out by their own width; drawers pull out by the cabinet depth.
fn clearance_zone(design: &StructuredDesignData, dims: &ResolvedDimensions) -> Option<ClearanceZone> {
    if design.cabinets.lower.is_empty() {
        return None;
    }

    let swing_depth = design
        .cabinets
        .lower
        .iter()
        .flat_map(|unit| front_slots(unit, dims.lower_body_height, dims.door_gap))
        .map(|slot| match slot.kind {
            FrontKind::Door => slot.width,
            FrontKind::Drawer => dims.lower_depth,
        })
        .fold(0.0, f64::max);

    Some(ClearanceZone {
        rect: Rect::new(
            0.0,
            0.0,
            tier_extent(&design.cabinets.lower),
            dims.lower_tier_height(),
        ),
        swing_depth,
        label: "Door swing clearance".to_string(),
    })
}
