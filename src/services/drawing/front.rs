//! Front elevation.

use crate::models::design::tier_extent;
use crate::models::{
    CabinetOutline, CabinetUnit, DimensionLine, FrontKind, FrontPanel, FrontView, HardwareKind,
    HardwareMark, Point, Rect, StructuredDesignData, Tier,
};
use crate::services::bom::cabinet_ref;
use crate::services::dimensions::ResolvedDimensions;
use crate::services::fronts::{front_slots, HingeSide};

/// Hinge cups sit this far inside the cabinet's top and bottom edges.
const HINGE_INSET_MM: f64 = 100.0;

/// Offset of per-cabinet width dimensions from the tier edge.
const CABINET_DIM_OFFSET_MM: f64 = 100.0;

/// Offset of the total width dimension below the floor line.
const TOTAL_DIM_OFFSET_MM: f64 = 200.0;

/// Builds the front elevation of the whole run.
pub fn build_front_view(design: &StructuredDesignData, dims: &ResolvedDimensions) -> FrontView {
    let mut view = FrontView::default();
    let lower = design.lower_sorted();
    let upper = design.upper_sorted();
    if lower.is_empty() && upper.is_empty() {
        return view;
    }

    let row_width = design.row_width();
    let lower_top = dims.lower_tier_height();
    let upper_base = dims.upper_base_y();
    let upper_top = upper_base + dims.upper_height;

    for (index, unit) in lower.iter().enumerate() {
        let rect = Rect::new(
            unit.position_mm,
            dims.leg_height,
            unit.width_mm,
            dims.lower_body_height,
        );
        add_cabinet(&mut view, unit, cabinet_ref(Tier::Lower, index), Tier::Lower, rect, dims);
        view.dimensions.push(DimensionLine::horizontal(
            rect.x,
            rect.right(),
            -CABINET_DIM_OFFSET_MM,
            None,
        ));
    }

    for (index, unit) in upper.iter().enumerate() {
        let rect = Rect::new(unit.position_mm, upper_base, unit.width_mm, dims.upper_height);
        add_cabinet(&mut view, unit, cabinet_ref(Tier::Upper, index), Tier::Upper, rect, dims);
        view.dimensions.push(DimensionLine::horizontal(
            rect.x,
            rect.right(),
            upper_top + dims.molding_height + CABINET_DIM_OFFSET_MM,
            None,
        ));
    }

    let mut height = 0.0_f64;

    if !lower.is_empty() {
        view.countertop = Some(Rect::new(0.0, lower_top, row_width, dims.countertop_thickness));
        if dims.leg_height > 0.0 {
            view.baseboard = Some(Rect::new(
                0.0,
                0.0,
                tier_extent(&design.cabinets.lower),
                dims.leg_height,
            ));
        }
        view.dimensions.push(DimensionLine::vertical(
            0.0,
            lower_top,
            -CABINET_DIM_OFFSET_MM,
            Some("Lower"),
        ));
        height = lower_top + dims.countertop_thickness;
    }

    if !upper.is_empty() {
        if dims.molding_height > 0.0 {
            view.molding = Some(Rect::new(
                0.0,
                upper_top,
                tier_extent(&design.cabinets.upper),
                dims.molding_height,
            ));
        }
        view.dimensions.push(DimensionLine::vertical(
            upper_base,
            upper_top,
            -CABINET_DIM_OFFSET_MM,
            Some("Upper"),
        ));
        height = upper_top + dims.molding_height;
    }

    if row_width > 0.0 {
        view.dimensions.push(DimensionLine::horizontal(
            0.0,
            row_width,
            -TOTAL_DIM_OFFSET_MM,
            Some("Total"),
        ));
    }

    view.width = row_width;
    view.height = height;
    view
}

fn add_cabinet(
    view: &mut FrontView,
    unit: &CabinetUnit,
    reference: String,
    tier: Tier,
    rect: Rect,
    dims: &ResolvedDimensions,
) {
    for slot in front_slots(unit, rect.height, dims.door_gap) {
        let front = Rect::new(
            rect.x + slot.x_offset,
            rect.y + slot.y_offset,
            slot.width,
            slot.height,
        );
        let center = front.center();

        match slot.kind {
            FrontKind::Door => {
                let hinge_x = match slot.hinge_side {
                    Some(HingeSide::Right) => front.right(),
                    Some(HingeSide::Left) | None => front.x,
                };
                for y in [rect.y + HINGE_INSET_MM, rect.top() - HINGE_INSET_MM] {
                    view.hardware.push(mark(HardwareKind::Hinge, hinge_x, y, &reference));
                }
                view.hardware
                    .push(mark(HardwareKind::Handle, center.x, center.y, &reference));
            }
            FrontKind::Drawer => {
                view.hardware
                    .push(mark(HardwareKind::Handle, center.x, center.y, &reference));
                view.hardware
                    .push(mark(HardwareKind::Rail, front.x, center.y, &reference));
                view.hardware
                    .push(mark(HardwareKind::Rail, front.right(), center.y, &reference));
            }
        }

        view.fronts.push(FrontPanel {
            cabinet_ref: reference.clone(),
            kind: slot.kind,
            rect: front,
        });
    }

    view.cabinets.push(CabinetOutline {
        cabinet_ref: reference,
        tier,
        rect,
    });
}

fn mark(kind: HardwareKind, x: f64, y: f64, reference: &str) -> HardwareMark {
    HardwareMark {
        kind,
        position: Point::new(x, y),
        cabinet_ref: reference.to_string(),
    }
}
