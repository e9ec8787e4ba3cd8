//! Markdown rendering of a bill of materials.
//!
//! Produces a summary list followed by one table per part category, in the
//! order the categories are declared. Empty categories are skipped.

use crate::models::{BomItem, BomResult, PartCategory};
use std::fmt::Write as _;

/// Generates a markdown document for `bom`.
///
/// # Example
///
/// ```no_run
/// use cabinetdraft::export::bom_table::generate_bom_table;
/// use cabinetdraft::models::{DesignCategory, StructuredDesignData};
/// use cabinetdraft::rules::Rules;
/// use cabinetdraft::services::generate_bom;
///
/// let design = StructuredDesignData::new(DesignCategory::Sink);
/// let bom = generate_bom(&design, &Rules::default());
/// println!("{}", generate_bom_table(&bom));
/// ```
#[must_use]
pub fn generate_bom_table(bom: &BomResult) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Bill of Materials\n");
    let _ = writeln!(output, "- **Category:** {}", bom.category.as_str());
    if !bom.style.is_empty() {
        let _ = writeln!(output, "- **Style:** {}", escape_cell(&bom.style));
    }
    let _ = writeln!(
        output,
        "- **Generated:** {}",
        bom.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(output, "- **Line items:** {}", bom.summary.total_items);
    let _ = writeln!(
        output,
        "- **Estimated sheets:** {}",
        bom.summary.estimated_sheets
    );

    if bom.items.is_empty() {
        output.push_str("\n_No parts._\n");
        return output;
    }

    for category in PartCategory::ALL {
        let items: Vec<&BomItem> = bom.items_in(category).collect();
        if items.is_empty() {
            continue;
        }

        let _ = writeln!(output, "\n## {} ({})\n", heading(category), items.len());
        output.push_str("| ID | Part | Material | W | H | D | Qty | Unit | Cabinet |\n");
        output.push_str("|----|------|----------|--:|--:|--:|----:|------|---------|\n");
        for item in items {
            let _ = writeln!(
                output,
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} |",
                item.id,
                escape_cell(&item.name),
                escape_cell(&item.material),
                format_mm(item.width_mm),
                format_mm(item.height_mm),
                format_mm(item.depth_mm),
                item.quantity,
                item.unit.as_str(),
                item.cabinet_ref.as_deref().unwrap_or("-"),
            );
        }
    }

    output
}

fn heading(category: PartCategory) -> &'static str {
    match category {
        PartCategory::Panel => "Panels",
        PartCategory::Board => "Boards",
        PartCategory::Hardware => "Hardware",
        PartCategory::Countertop => "Countertop",
        PartCategory::Equipment => "Equipment",
        PartCategory::Accessory => "Accessories",
        PartCategory::Finish => "Finish",
    }
}

/// Blank for zero, one decimal only when needed.
fn format_mm(value: f64) -> String {
    if value.abs() < f64::EPSILON {
        String::new()
    } else if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CabinetUnit, DesignCategory, StructuredDesignData};
    use crate::rules::Rules;
    use crate::services::generate_bom;

    #[test]
    fn test_empty_bom() {
        let bom = generate_bom(
            &StructuredDesignData::new(DesignCategory::Storage),
            &Rules::default(),
        );
        let table = generate_bom_table(&bom);
        assert!(table.contains("# Bill of Materials"));
        assert!(table.contains("_No parts._"));
        assert!(!table.contains("| ID |"));
    }

    #[test]
    fn test_sections_follow_category_order() {
        let mut design = StructuredDesignData::new(DesignCategory::Storage);
        design.cabinets.lower = vec![CabinetUnit::new(0.0, 600.0, 1)];
        let bom = generate_bom(&design, &Rules::default());
        let table = generate_bom_table(&bom);

        let panels = table.find("## Panels").unwrap();
        let boards = table.find("## Boards").unwrap();
        let hardware = table.find("## Hardware").unwrap();
        assert!(panels < boards && boards < hardware);
        assert!(!table.contains("## Equipment"));
        assert!(table.contains("| BOM-001 | Door |"));
    }

    #[test]
    fn test_format_mm() {
        assert_eq!(format_mm(0.0), "");
        assert_eq!(format_mm(598.0), "598");
        assert_eq!(format_mm(2.7), "2.7");
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
    }
}
