//! Cut-sheet layout of every sheet part in the BOM.

use std::collections::BTreeMap;

use crate::models::{BomResult, DimensionLine, ManufacturingLayout, PanelDetail, PartCategory, Rect};

/// Panels per grid row.
pub const GRID_COLUMNS: usize = 3;

/// Free space between grid cells.
const CELL_SPACING_MM: f64 = 200.0;

/// Dimension offset from each panel.
const DIM_OFFSET_MM: f64 = 50.0;

/// Lays out every `panel` and `board` line in a fixed 3-column grid.
///
/// Cells are uniform (largest panel plus spacing); rows advance along +y.
/// Fronts also carry their four edge-banding sides.
pub fn build_manufacturing_layout(bom: &BomResult) -> ManufacturingLayout {
    let sheet_parts: Vec<_> = bom
        .items
        .iter()
        .filter(|item| item.part_category.is_sheet_part())
        .collect();

    let max_width = sheet_parts.iter().map(|i| i.width_mm).fold(0.0, f64::max);
    let max_height = sheet_parts.iter().map(|i| i.height_mm).fold(0.0, f64::max);
    let cell_width = max_width + CELL_SPACING_MM;
    let cell_height = max_height + CELL_SPACING_MM;

    let panels = sheet_parts
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let column = index % GRID_COLUMNS;
            let row = index / GRID_COLUMNS;
            let rect = Rect::new(
                column as f64 * cell_width,
                row as f64 * cell_height,
                item.width_mm,
                item.height_mm,
            );

            let edge_banding = if item.part_category == PartCategory::Panel {
                rect.edges().to_vec()
            } else {
                Vec::new()
            };

            PanelDetail {
                bom_id: item.id.clone(),
                name: item.name.clone(),
                material: item.material.clone(),
                thickness: item.depth_mm,
                quantity: item.quantity,
                column,
                row,
                rect,
                dimensions: vec![
                    DimensionLine::horizontal(rect.x, rect.right(), rect.y - DIM_OFFSET_MM, None),
                    DimensionLine::vertical(rect.y, rect.top(), rect.x - DIM_OFFSET_MM, None),
                ],
                edge_banding,
            }
        })
        .collect();

    let mut bom_references: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for item in &bom.items {
        if let Some(cab) = &item.cabinet_ref {
            bom_references
                .entry(cab.clone())
                .or_default()
                .push(item.id.clone());
        }
    }

    ManufacturingLayout {
        panels,
        bom_references,
    }
}
