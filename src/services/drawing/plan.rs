//! Top-down plan. Coordinates are used as-is: y is the distance from the wall.

use crate::models::{DimensionLine, PlanFootprint, PlanView, Rect, StructuredDesignData, Tier};
use crate::rules::Rules;
use crate::services::bom::cabinet_ref;
use crate::services::dimensions::ResolvedDimensions;

const DIM_OFFSET_MM: f64 = 100.0;

/// Builds the plan. Upper cabinets are drawn `lower_depth * depth_ratio`
/// deep so they read differently from the base cabinets beneath them.
pub fn build_plan_view(
    design: &StructuredDesignData,
    dims: &ResolvedDimensions,
    rules: &Rules,
) -> PlanView {
    let mut view = PlanView::default();
    if design.cabinets.is_empty() {
        return view;
    }

    let row_width = design.row_width();
    let upper_plan_depth = (dims.lower_depth * rules.upper_cabinet.depth_ratio).max(0.0);

    for (index, unit) in design.lower_sorted().iter().enumerate() {
        view.cabinets.push(PlanFootprint {
            cabinet_ref: cabinet_ref(Tier::Lower, index),
            tier: Tier::Lower,
            rect: Rect::new(unit.position_mm, 0.0, unit.width_mm, dims.lower_depth),
        });
    }

    for (index, unit) in design.upper_sorted().iter().enumerate() {
        view.cabinets.push(PlanFootprint {
            cabinet_ref: cabinet_ref(Tier::Upper, index),
            tier: Tier::Upper,
            rect: Rect::new(unit.position_mm, 0.0, unit.width_mm, upper_plan_depth),
        });
    }

    let depth = if design.cabinets.lower.is_empty() {
        upper_plan_depth
    } else {
        view.countertop = Some(Rect::new(0.0, 0.0, row_width, dims.lower_depth));
        dims.lower_depth
    };

    if row_width > 0.0 {
        view.dimensions.push(DimensionLine::horizontal(
            0.0,
            row_width,
            -DIM_OFFSET_MM,
            Some("Total"),
        ));
    }
    view.dimensions
        .push(DimensionLine::vertical(0.0, depth, -DIM_OFFSET_MM, Some("Depth")));

    view.width = row_width;
    view.depth = depth;
    view
}
