//! Drawing coordinate generation.
//!
//! [`generate_drawing`] turns a design and its BOM into the three drawing
//! groups: common views (front, side, plan), the manufacturing cut-sheet
//! layout and the installation layout. All coordinates are millimetres with
//! y growing upward from the floor; the SVG renderer flips them.

pub mod front;
pub mod installation;
pub mod manufacturing;
pub mod plan;
pub mod side;

use chrono::Utc;
use tracing::debug;

use crate::models::{BomResult, CommonViews, DrawingData, DrawingMetadata, StructuredDesignData};
use crate::rules::Rules;
use crate::services::dimensions::ResolvedDimensions;

pub use front::build_front_view;
pub use installation::build_installation_layout;
pub use manufacturing::build_manufacturing_layout;
pub use plan::build_plan_view;
pub use side::build_side_view;

/// Generates every drawing for `design`.
///
/// `bom` must be the BOM generated from the same design; its sheet parts feed
/// the manufacturing layout and its cabinet references are cross-linked.
#[must_use]
pub fn generate_drawing(design: &StructuredDesignData, bom: &BomResult, rules: &Rules) -> DrawingData {
    let dims = ResolvedDimensions::resolve(design, rules);

    let common = CommonViews {
        front_view: build_front_view(design, &dims),
        side_view: build_side_view(design, &dims, rules),
        plan_view: build_plan_view(design, &dims, rules),
    };
    let manufacturing = build_manufacturing_layout(bom);
    let installation = build_installation_layout(design, &dims);

    debug!(
        "Generated drawings for {} design: {} cabinets, {} panels, {} utility markers",
        design.category.as_str(),
        common.front_view.cabinets.len(),
        manufacturing.panels.len(),
        installation.utility_markers.len()
    );

    DrawingData {
        common,
        manufacturing,
        installation,
        metadata: DrawingMetadata {
            category: design.category,
            style: design.style.clone(),
            generated_at: Utc::now(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CabinetUnit, DesignCategory, EquipmentDescriptor, EquipmentKind, FrontKind, HardwareKind,
        PartCategory, SectionPartKind, Tier, UtilityKind,
    };
    use crate::services::bom::generate_bom;

    fn sink_design() -> StructuredDesignData {
        let mut design = StructuredDesignData::new(DesignCategory::Sink);
        design.style = "modern".to_string();
        design.layout.total_width_mm = 2400.0;
        design.cabinets.lower = vec![
            CabinetUnit::new(0.0, 800.0, 2),
            CabinetUnit::drawer(800.0, 800.0, 3),
            CabinetUnit::new(1600.0, 800.0, 2),
        ];
        design.cabinets.upper = vec![
            CabinetUnit::new(0.0, 1200.0, 2),
            CabinetUnit::new(1200.0, 1200.0, 2),
        ];
        design
    }

    fn drawing_for(design: &StructuredDesignData) -> DrawingData {
        let rules = Rules::default();
        let bom = generate_bom(design, &rules);
        generate_drawing(design, &bom, &rules)
    }

    #[test]
    fn test_empty_design_produces_empty_views() {
        let design = StructuredDesignData::new(DesignCategory::Storage);
        let drawing = drawing_for(&design);
        assert!(drawing.common.front_view.cabinets.is_empty());
        assert!(drawing.common.side_view.parts.is_empty());
        assert!(drawing.common.plan_view.cabinets.is_empty());
        assert!(drawing.manufacturing.panels.is_empty());
        assert!(drawing.installation.clearance_zones.is_empty());
    }

    #[test]
    fn test_front_view_places_tiers() {
        let drawing = drawing_for(&sink_design());
        let front = &drawing.common.front_view;

        let lower: Vec<_> = front.cabinets.iter().filter(|c| c.tier == Tier::Lower).collect();
        let upper: Vec<_> = front.cabinets.iter().filter(|c| c.tier == Tier::Upper).collect();
        assert_eq!(lower.len(), 3);
        assert_eq!(upper.len(), 2);

        // legs 150, body 720, gap 600
        assert!((lower[0].rect.y - 150.0).abs() < f64::EPSILON);
        assert!((lower[0].rect.height - 720.0).abs() < f64::EPSILON);
        assert!((upper[0].rect.y - 1470.0).abs() < f64::EPSILON);
        assert!((front.height - 2190.0).abs() < f64::EPSILON);
        assert!((front.width - 2400.0).abs() < f64::EPSILON);

        let countertop = front.countertop.expect("countertop");
        assert!((countertop.y - 870.0).abs() < f64::EPSILON);
        assert!((countertop.width - 2400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_front_view_hardware() {
        let drawing = drawing_for(&sink_design());
        let front = &drawing.common.front_view;

        let l2_drawers = front
            .fronts
            .iter()
            .filter(|f| f.cabinet_ref == "L2" && f.kind == FrontKind::Drawer)
            .count();
        assert_eq!(l2_drawers, 3);

        let l1_hinges = front
            .hardware
            .iter()
            .filter(|h| h.cabinet_ref == "L1" && h.kind == HardwareKind::Hinge)
            .count();
        assert_eq!(l1_hinges, 4);

        let l2_rails = front
            .hardware
            .iter()
            .filter(|h| h.cabinet_ref == "L2" && h.kind == HardwareKind::Rail)
            .count();
        assert_eq!(l2_rails, 6);
    }

    #[test]
    fn test_front_view_total_dimension() {
        let drawing = drawing_for(&sink_design());
        let total = drawing
            .common
            .front_view
            .dimensions
            .iter()
            .find(|d| d.label.as_deref() == Some("Total"))
            .expect("total dimension");
        assert!((total.value - 2400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_side_view_parts() {
        let drawing = drawing_for(&sink_design());
        let side = &drawing.common.side_view;
        assert!((side.depth - 580.0).abs() < f64::EPSILON);

        let count = |kind| side.parts.iter().filter(|p| p.kind == kind).count();
        assert_eq!(count(SectionPartKind::SidePanel), 2);
        assert_eq!(count(SectionPartKind::BottomBoard), 1);
        assert_eq!(count(SectionPartKind::BackPanel), 1);
        assert_eq!(count(SectionPartKind::Shelf), 1);
        assert_eq!(count(SectionPartKind::Countertop), 1);
    }

    #[test]
    fn test_side_view_upper_only_has_no_countertop() {
        let mut design = StructuredDesignData::new(DesignCategory::Storage);
        design.cabinets.upper = vec![CabinetUnit::new(0.0, 600.0, 1)];
        let drawing = drawing_for(&design);
        let side = &drawing.common.side_view;
        assert!((side.depth - 319.0).abs() < f64::EPSILON);
        assert!(side
            .parts
            .iter()
            .all(|p| p.kind != SectionPartKind::Countertop));
    }

    #[test]
    fn test_plan_view_depths() {
        let drawing = drawing_for(&sink_design());
        let plan = &drawing.common.plan_view;
        let upper = plan.cabinets.iter().find(|c| c.tier == Tier::Upper).unwrap();
        assert!((upper.rect.height - 319.0).abs() < f64::EPSILON);
        assert!((plan.depth - 580.0).abs() < f64::EPSILON);
        assert!(plan.countertop.is_some());
    }

    #[test]
    fn test_manufacturing_covers_sheet_parts() {
        let design = sink_design();
        let rules = Rules::default();
        let bom = generate_bom(&design, &rules);
        let drawing = generate_drawing(&design, &bom, &rules);

        let sheet_parts = bom
            .items
            .iter()
            .filter(|i| i.part_category.is_sheet_part())
            .count();
        assert_eq!(drawing.manufacturing.panels.len(), sheet_parts);

        for panel in &drawing.manufacturing.panels {
            assert!(panel.column < manufacturing::GRID_COLUMNS);
            let item = bom.get(&panel.bom_id).expect("panel references a BOM line");
            assert_eq!(
                panel.edge_banding.is_empty(),
                item.part_category != PartCategory::Panel
            );
        }

        let l1 = &drawing.manufacturing.bom_references["L1"];
        assert!(l1.iter().all(|id| bom.get(id).is_some()));
    }

    #[test]
    fn test_manufacturing_cells_do_not_overlap() {
        let drawing = drawing_for(&sink_design());
        let panels = &drawing.manufacturing.panels;
        for (i, a) in panels.iter().enumerate() {
            for b in &panels[i + 1..] {
                let apart = a.rect.right() <= b.rect.x
                    || b.rect.right() <= a.rect.x
                    || a.rect.top() <= b.rect.y
                    || b.rect.top() <= a.rect.y;
                assert!(apart, "{} overlaps {}", a.bom_id, b.bom_id);
            }
        }
    }

    #[test]
    fn test_installation_wall_falls_back_to_row() {
        let drawing = drawing_for(&sink_design());
        let wall = drawing.installation.wall;
        assert!((wall.width - 2400.0).abs() < f64::EPSILON);
        assert!((wall.height - 2190.0).abs() < f64::EPSILON);
        assert!(drawing.installation.tile_grid.is_none());
    }

    #[test]
    fn test_installation_tile_grid_and_markers() {
        let mut design = sink_design();
        design.wall.width_mm = 2500.0;
        design.wall.height_mm = 2400.0;
        design.wall.tile_type = Some("porcelain".to_string());
        design.utilities.water.detected = true;
        design.utilities.water.from_origin_mm = 1200.0;
        design.utilities.exhaust.detected = true;
        design.utilities.exhaust.from_origin_mm = 2000.0;

        let drawing = drawing_for(&design);
        let grid = drawing.installation.tile_grid.as_ref().expect("tile grid");
        assert_eq!(grid.cols, 9);
        assert_eq!(grid.rows, 4);

        let markers = &drawing.installation.utility_markers;
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].kind, UtilityKind::Water);
        assert!((markers[0].position.x - 1200.0).abs() < f64::EPSILON);
        assert!((markers[0].position.y - 500.0).abs() < f64::EPSILON);
        assert_eq!(markers[1].kind, UtilityKind::Exhaust);
        assert!((markers[1].position.y - 2200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_installation_equipment_zone_uses_host_cabinet() {
        let mut design = sink_design();
        design.cabinets.lower[0].has_sink = Some(true);
        design.equipment.sink = Some(EquipmentDescriptor {
            model: Some("Undermount 800".to_string()),
            width_mm: Some(760.0),
            ..EquipmentDescriptor::default()
        });

        let drawing = drawing_for(&design);
        let zone = drawing
            .installation
            .equipment_zones
            .iter()
            .find(|z| z.kind == EquipmentKind::Sink)
            .expect("sink zone");
        assert!((zone.rect.center().x - 400.0).abs() < f64::EPSILON);
        assert!((zone.rect.width - 760.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clearance_swing_depth() {
        let drawing = drawing_for(&sink_design());
        let clearance = &drawing.installation.clearance_zones[0];
        // drawers pull out by the full cabinet depth
        assert!((clearance.swing_depth - 580.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_metadata() {
        let drawing = drawing_for(&sink_design());
        assert_eq!(drawing.metadata.category, DesignCategory::Sink);
        assert_eq!(drawing.metadata.style, "modern");
    }
}
