//! Cross-section through a representative cabinet.

use crate::models::{DimensionLine, Rect, SectionPart, SectionPartKind, SideView, StructuredDesignData};
use crate::rules::Rules;
use crate::services::dimensions::{non_negative, ResolvedDimensions};

/// Dimension offset from the section outline.
const DIM_OFFSET_MM: f64 = 100.0;

/// Builds the side section. Uses a lower cabinet when the run has one,
/// otherwise an upper cabinet; empty when there are no cabinets.
pub fn build_side_view(
    design: &StructuredDesignData,
    dims: &ResolvedDimensions,
    rules: &Rules,
) -> SideView {
    let has_lower = !design.cabinets.lower.is_empty();
    let (depth, body, base) = if has_lower {
        (dims.lower_depth, dims.lower_body_height, dims.leg_height)
    } else if !design.cabinets.upper.is_empty() {
        (dims.upper_depth, dims.upper_height, 0.0)
    } else {
        return SideView::default();
    };

    let t = dims.body_thickness;
    let back_t = dims.back_thickness;
    let top = base + body;

    let mut parts = vec![
        part(SectionPartKind::SidePanel, Rect::new(0.0, base, t, body)),
        part(
            SectionPartKind::SidePanel,
            Rect::new(non_negative(depth - t), base, t, body),
        ),
        part(SectionPartKind::BottomBoard, Rect::new(0.0, base, depth, t)),
        part(
            SectionPartKind::BackPanel,
            Rect::new(non_negative(depth - back_t), base, back_t, body),
        ),
        part(
            SectionPartKind::Shelf,
            Rect::new(
                0.0,
                base + (body - t) / 2.0,
                non_negative(depth - rules.construction.shelf_depth_reduction),
                t,
            ),
        ),
    ];

    if has_lower {
        parts.push(part(
            SectionPartKind::Countertop,
            Rect::new(0.0, top, depth, dims.countertop_thickness),
        ));
    }

    let annotation_y = top + dims.countertop_thickness + DIM_OFFSET_MM;
    let dimensions = vec![
        DimensionLine::horizontal(0.0, depth, base - DIM_OFFSET_MM, Some("Depth")),
        DimensionLine::vertical(base, top, -DIM_OFFSET_MM, Some("Body")),
        DimensionLine::horizontal(0.0, t, annotation_y, Some("Side")),
        DimensionLine::horizontal(
            non_negative(depth - back_t),
            depth,
            annotation_y + DIM_OFFSET_MM,
            Some("Back"),
        ),
    ];

    SideView {
        depth,
        body_height: body,
        parts,
        dimensions,
    }
}

fn part(kind: SectionPartKind, rect: Rect) -> SectionPart {
    SectionPart { kind, rect }
}
