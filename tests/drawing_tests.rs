//! Integration tests for drawing coordinate generation.

use cabinetdraft::models::{
    DrawingData, EquipmentKind, FrontKind, HardwareKind, PartCategory, Tier, UtilityKind,
};
use cabinetdraft::rules::Rules;
use cabinetdraft::services::{generate_bom, generate_drawing};

mod fixtures;
use fixtures::sink_design;

fn sink_drawing() -> (DrawingData, cabinetdraft::models::BomResult) {
    let rules = Rules::default();
    let design = sink_design();
    let bom = generate_bom(&design, &rules);
    let drawing = generate_drawing(&design, &bom, &rules);
    (drawing, bom)
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn test_front_view_matches_bom_fronts() {
    let (drawing, bom) = sink_drawing();
    let front = &drawing.common.front_view;

    let bom_fronts: u32 = bom
        .items_in(PartCategory::Panel)
        .map(|item| item.quantity)
        .sum();
    assert_eq!(front.fronts.len() as u32, bom_fronts);

    let drawers = front
        .fronts
        .iter()
        .filter(|f| f.kind == FrontKind::Drawer)
        .count();
    assert_eq!(drawers, 3);
}

#[test]
fn test_front_view_tier_placement() {
    let (drawing, _) = sink_drawing();
    let front = &drawing.common.front_view;

    for outline in &front.cabinets {
        match outline.tier {
            Tier::Lower => {
                assert!(approx(outline.rect.y, 150.0), "{}", outline.cabinet_ref);
                assert!(approx(outline.rect.height, 720.0), "{}", outline.cabinet_ref);
            }
            // lower tier 870 + fixed 600 gap
            Tier::Upper => assert!(approx(outline.rect.y, 1470.0), "{}", outline.cabinet_ref),
        }
    }

    let countertop = front.countertop.expect("lower cabinets imply a countertop");
    assert!(approx(countertop.y, 870.0));
    assert!(approx(countertop.width, 3600.0));

    let baseboard = front.baseboard.expect("legs imply a baseboard");
    assert!(approx(baseboard.y, 0.0));
    assert!(approx(baseboard.height, 150.0));
}

#[test]
fn test_front_view_hardware() {
    let (drawing, _) = sink_drawing();
    let hardware = &drawing.common.front_view.hardware;

    let count = |cabinet: &str, kind: HardwareKind| {
        hardware
            .iter()
            .filter(|h| h.cabinet_ref == cabinet && h.kind == kind)
            .count()
    };

    // two hinges per door
    assert_eq!(count("L1", HardwareKind::Hinge), 4);
    assert_eq!(count("L3", HardwareKind::Hinge), 2);
    assert_eq!(count("U1", HardwareKind::Hinge), 4);
    // handle and rail pair per drawer
    assert_eq!(count("L2", HardwareKind::Handle), 3);
    assert_eq!(count("L2", HardwareKind::Hinge), 0);
    assert!(count("L2", HardwareKind::Rail) >= 3);
}

#[test]
fn test_front_view_dimensions() {
    let (drawing, _) = sink_drawing();
    let dimensions = &drawing.common.front_view.dimensions;

    assert!(dimensions.iter().any(|d| approx(d.value, 3600.0)));
    for width in [800.0, 600.0, 900.0] {
        assert!(
            dimensions.iter().any(|d| approx(d.value, width)),
            "missing {width} dimension"
        );
    }
    assert!(dimensions.iter().all(|d| d.unit == "mm"));
}

#[test]
fn test_side_view_parts_fit_depth() {
    let (drawing, _) = sink_drawing();
    let side = &drawing.common.side_view;

    assert!(approx(side.depth, 580.0));
    assert!(!side.parts.is_empty());
    for part in &side.parts {
        assert!(part.rect.x >= -1e-6);
        assert!(part.rect.right() <= side.depth + 1e-6, "{:?}", part.kind);
    }
}

#[test]
fn test_plan_view_depths() {
    let (drawing, _) = sink_drawing();
    let plan = &drawing.common.plan_view;

    for footprint in &plan.cabinets {
        match footprint.tier {
            Tier::Lower => assert!(approx(footprint.rect.height, 580.0)),
            Tier::Upper => assert!(approx(footprint.rect.height, 580.0 * 0.55)),
        }
    }
    assert!(plan.countertop.is_some());
}

#[test]
fn test_manufacturing_references_bom() {
    let (drawing, bom) = sink_drawing();
    let manufacturing = &drawing.manufacturing;

    let sheet_items = bom
        .items
        .iter()
        .filter(|item| item.part_category.is_sheet_part())
        .count();
    assert_eq!(manufacturing.panels.len(), sheet_items);

    for panel in &manufacturing.panels {
        let item = bom.get(&panel.bom_id).expect("panel refers to a BOM line");
        assert_eq!(item.name, panel.name);
    }
    for ids in manufacturing.bom_references.values() {
        for id in ids {
            assert!(bom.get(id).is_some(), "{id} missing from BOM");
        }
    }
}

#[test]
fn test_installation_layout() {
    let (drawing, _) = sink_drawing();
    let installation = &drawing.installation;

    assert!(approx(installation.wall.width, 3600.0));
    assert!(approx(installation.wall.height, 2400.0));

    let grid = installation.tile_grid.as_ref().expect("tiled wall");
    assert_eq!(grid.tile_type, "ceramic");
    assert_eq!((grid.cols, grid.rows), (12, 4));

    let kinds: Vec<UtilityKind> = installation.utility_markers.iter().map(|m| m.kind).collect();
    assert_eq!(kinds, vec![UtilityKind::Water, UtilityKind::Exhaust]);
    assert!(approx(installation.utility_markers[1].position.x, 1800.0));
    assert!(approx(installation.utility_markers[1].position.y, 2200.0));

    let sink = installation
        .equipment_zones
        .iter()
        .find(|z| z.kind == EquipmentKind::Sink)
        .expect("sink zone");
    assert!(approx(sink.rect.x, 20.0));
    assert!(approx(sink.rect.width, 760.0));

    // hood follows the cooktop cabinet (1400..2200)
    let hood = installation
        .equipment_zones
        .iter()
        .find(|z| z.kind == EquipmentKind::Hood)
        .expect("hood zone");
    assert!(approx(hood.rect.center().x, 1800.0));
    assert!(approx(hood.rect.y, 1470.0));

    assert_eq!(installation.clearance_zones.len(), 1);
    assert!(installation.clearance_zones[0].swing_depth >= 580.0);
}

#[test]
fn test_metadata() {
    let (drawing, _) = sink_drawing();
    assert_eq!(drawing.metadata.style, "modern");
    assert_eq!(
        drawing.metadata.category,
        cabinetdraft::models::DesignCategory::Sink
    );
}

#[test]
fn test_generation_is_deterministic() {
    let (first, _) = sink_drawing();
    let (mut second, _) = sink_drawing();

    // only the timestamp may differ between runs
    second.metadata.generated_at = first.metadata.generated_at;
    assert_eq!(first, second);
}
