//! Resolution of per-tier dimensions from a design and the rules.
//!
//! Both generators size cabinets through [`ResolvedDimensions`] so the BOM and
//! the drawings agree on every measurement.

use crate::constants::UPPER_TIER_GAP_MM;
use crate::models::{DesignCategory, StructuredDesignData};
use crate::rules::Rules;

/// Dimensions after applying rule defaults to missing design fields.
///
/// All values are millimetres and never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedDimensions {
    /// Leg (toe-kick) height
    pub leg_height: f64,
    /// Lower carcass height (tier height minus legs)
    pub lower_body_height: f64,
    /// Lower cabinet depth
    pub lower_depth: f64,
    /// Upper carcass height
    pub upper_height: f64,
    /// Upper cabinet depth
    pub upper_depth: f64,
    /// Crown molding height (0 = none)
    pub molding_height: f64,
    /// Carcass board thickness
    pub body_thickness: f64,
    /// Door and drawer front thickness
    pub door_thickness: f64,
    /// Back panel thickness
    pub back_thickness: f64,
    /// Countertop thickness
    pub countertop_thickness: f64,
    /// Door gap
    pub door_gap: f64,
}

impl ResolvedDimensions {
    /// Resolves the design's dimensions against `rules`.
    #[must_use]
    pub fn resolve(design: &StructuredDesignData, rules: &Rules) -> Self {
        let specs = &design.cabinet_specs;
        let is_wardrobe = design.category == DesignCategory::Wardrobe;

        let leg_height = non_negative(specs.leg_height_mm.unwrap_or(rules.cabinet.leg_height));

        let lower_height = specs.lower_height_mm.unwrap_or(if is_wardrobe {
            rules.wardrobe.default_height
        } else {
            rules.cabinet.lower_height
        });

        let lower_depth = non_negative(design.layout.depth_mm.unwrap_or(if is_wardrobe {
            rules.wardrobe.default_depth
        } else {
            rules.cabinet.lower_depth
        }));

        let upper_depth = non_negative(
            specs
                .upper_depth_mm
                .unwrap_or_else(|| (lower_depth * rules.upper_cabinet.depth_ratio).round()),
        );

        Self {
            leg_height,
            lower_body_height: non_negative(lower_height - leg_height),
            lower_depth,
            upper_height: non_negative(
                specs
                    .upper_height_mm
                    .unwrap_or(rules.cabinet.upper_height),
            ),
            upper_depth,
            molding_height: clamp_molding(
                specs
                    .molding_height_mm
                    .unwrap_or(rules.cabinet.molding_height),
                rules,
            ),
            body_thickness: non_negative(rules.materials.body.thickness),
            door_thickness: non_negative(rules.materials.door.thickness),
            back_thickness: non_negative(rules.materials.back_panel.thickness),
            countertop_thickness: non_negative(rules.materials.countertop_thickness),
            door_gap: non_negative(rules.construction.door_gap),
        }
    }

    /// Height of the lower tier from the floor to the countertop.
    #[must_use]
    pub fn lower_tier_height(&self) -> f64 {
        self.leg_height + self.lower_body_height
    }

    /// Bottom edge of the upper tier in the front view.
    #[must_use]
    pub fn upper_base_y(&self) -> f64 {
        self.lower_tier_height() + UPPER_TIER_GAP_MM
    }

    /// Carcass inner width for a cabinet of `width`.
    #[must_use]
    pub fn inner_width(&self, width: f64) -> f64 {
        non_negative(width - 2.0 * self.body_thickness)
    }
}

/// Clamps to zero.
pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Zero stays zero (no molding); anything else is bounded by the rules.
fn clamp_molding(height: f64, rules: &Rules) -> f64 {
    if height <= 0.0 || !height.is_finite() {
        return 0.0;
    }
    let min = rules.molding.min_height.max(0.0);
    let max = rules.molding.max_height.max(min);
    height.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CabinetSpecs;

    #[test]
    fn test_defaults_give_720_body() {
        let design = StructuredDesignData::default();
        let dims = ResolvedDimensions::resolve(&design, &Rules::default());
        assert!((dims.lower_body_height - 720.0).abs() < f64::EPSILON);
        assert!((dims.lower_tier_height() - 870.0).abs() < f64::EPSILON);
        assert!((dims.upper_base_y() - 1470.0).abs() < f64::EPSILON);
        assert!((dims.upper_depth - 319.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_design_values_override_defaults() {
        let mut design = StructuredDesignData::default();
        design.cabinet_specs = CabinetSpecs {
            lower_height_mm: Some(900.0),
            upper_height_mm: Some(800.0),
            upper_depth_mm: Some(350.0),
            leg_height_mm: Some(100.0),
            molding_height_mm: None,
        };
        design.layout.depth_mm = Some(600.0);

        let dims = ResolvedDimensions::resolve(&design, &Rules::default());
        assert!((dims.lower_body_height - 800.0).abs() < f64::EPSILON);
        assert!((dims.upper_height - 800.0).abs() < f64::EPSILON);
        assert!((dims.upper_depth - 350.0).abs() < f64::EPSILON);
        assert!((dims.lower_depth - 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wardrobe_defaults() {
        let design = StructuredDesignData::new(DesignCategory::Wardrobe);
        let rules = Rules::default();
        let dims = ResolvedDimensions::resolve(&design, &rules);
        assert!(
            (dims.lower_tier_height() - rules.wardrobe.default_height).abs() < f64::EPSILON
        );
        assert!((dims.lower_depth - rules.wardrobe.default_depth).abs() < f64::EPSILON);
    }

    #[test]
    fn test_molding_is_clamped() {
        let rules = Rules::default();
        let mut design = StructuredDesignData::default();

        design.cabinet_specs.molding_height_mm = Some(10.0);
        let dims = ResolvedDimensions::resolve(&design, &rules);
        assert!((dims.molding_height - rules.molding.min_height).abs() < f64::EPSILON);

        design.cabinet_specs.molding_height_mm = Some(500.0);
        let dims = ResolvedDimensions::resolve(&design, &rules);
        assert!((dims.molding_height - rules.molding.max_height).abs() < f64::EPSILON);

        design.cabinet_specs.molding_height_mm = Some(0.0);
        let dims = ResolvedDimensions::resolve(&design, &rules);
        assert!(dims.molding_height.abs() < f64::EPSILON);
    }

    #[test]
    fn test_legs_taller_than_tier_never_go_negative() {
        let mut design = StructuredDesignData::default();
        design.cabinet_specs.lower_height_mm = Some(100.0);
        design.cabinet_specs.leg_height_mm = Some(150.0);
        let dims = ResolvedDimensions::resolve(&design, &Rules::default());
        assert!(dims.lower_body_height.abs() < f64::EPSILON);
        assert!(dims.inner_width(20.0).abs() < f64::EPSILON);
    }
}
